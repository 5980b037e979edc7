//! Global subscriber installation. Runs in its own test binary.

use std::sync::Arc;

use balancer_config::config::parse_config;
use balancer_config::observability::{init_logging, LoggingError, LoggingObserver};
use balancer_config::{BalancerConfiguration, LoadBalancerName};

#[test]
fn test_init_logging_once() {
    let config = parse_config(
        r#"
        [observability]
        log_level = "debug"
        log_format = "json"
        "#,
    )
    .unwrap();

    init_logging(&config.observability).unwrap();

    let mut channel = BalancerConfiguration::from_config(&config.balancer);
    channel.subscribe(Arc::new(LoggingObserver::new("test-channel")));
    channel.update(LoadBalancerName::RoundRobin);

    let err = init_logging(&config.observability).unwrap_err();
    assert!(matches!(err, LoggingError::AlreadyInitialized(_)));
}
