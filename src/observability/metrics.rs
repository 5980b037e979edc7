//! Metrics collection and exposition.
//!
//! # Metrics
//! - `balancer_config_updates_total` (counter): policy updates, labelled by the new policy
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no recorder means no cost beyond a branch
//! - `init_metrics` installs a Prometheus recorder whose handle renders the text format

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::balancer::LoadBalancerName;

pub const POLICY_UPDATES_TOTAL: &str = "balancer_config_updates_total";

/// Install a global Prometheus recorder and return the handle used to render it.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    ::metrics::describe_counter!(
        POLICY_UPDATES_TOTAL,
        "Number of load balancing policy updates applied to channel configurations"
    );
    tracing::info!("Metrics recorder installed");
    Ok(handle)
}

pub fn record_policy_update(policy: LoadBalancerName) {
    ::metrics::counter!(POLICY_UPDATES_TOTAL, "policy" => policy.as_str()).increment(1);
}
