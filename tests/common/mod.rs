//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use balancer_config::{BalancerConfiguration, BalancerObserver, LoadBalancerName};

/// One notification as seen by a recording observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub observer: &'static str,
    pub policy: LoadBalancerName,
}

/// Shared, ordered log of notifications across several observers.
pub type NotificationLog = Arc<Mutex<Vec<Notification>>>;

pub fn notification_log() -> NotificationLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Observer that appends its label and the policy it read to a shared log.
pub struct RecordingObserver {
    label: &'static str,
    log: NotificationLog,
}

impl RecordingObserver {
    pub fn new(label: &'static str, log: &NotificationLog) -> Arc<dyn BalancerObserver> {
        Arc::new(Self {
            label,
            log: log.clone(),
        })
    }
}

impl BalancerObserver for RecordingObserver {
    fn on_update(&self, config: &BalancerConfiguration) {
        self.log.lock().unwrap().push(Notification {
            observer: self.label,
            policy: config.current(),
        });
    }
}

/// Labels of every notification, in delivery order.
#[allow(dead_code)]
pub fn labels(log: &NotificationLog) -> Vec<&'static str> {
    log.lock().unwrap().iter().map(|n| n.observer).collect()
}

/// Number of notifications delivered to `label`.
#[allow(dead_code)]
pub fn count_for(log: &NotificationLog, label: &str) -> usize {
    log.lock().unwrap().iter().filter(|n| n.observer == label).count()
}
