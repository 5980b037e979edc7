//! Diagnostics observer for policy changes.

use crate::balancer::{BalancerConfiguration, BalancerObserver};

/// Logs every policy update at `info` level, tagged with the channel it belongs to.
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    channel: String,
}

impl LoggingObserver {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

impl BalancerObserver for LoggingObserver {
    fn on_update(&self, config: &BalancerConfiguration) {
        tracing::info!(
            channel = %self.channel,
            policy = %config.current(),
            "Load balancing policy set"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balancer::LoadBalancerName;
    use std::sync::Arc;

    #[test]
    fn test_logging_observer_subscribes() {
        let mut config = BalancerConfiguration::new();
        let observer = LoggingObserver::new("channel-1");
        assert_eq!(observer.channel(), "channel-1");

        config.subscribe(Arc::new(observer));
        config.update(LoadBalancerName::RoundRobin);

        assert_eq!(config.observer_count(), 1);
        assert_eq!(config.current(), LoadBalancerName::RoundRobin);
    }
}
