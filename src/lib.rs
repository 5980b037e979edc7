//! Per-channel load balancing policy configuration.
//!
//! A channel owns one [`BalancerConfiguration`], seeded from
//! [`config::BalancerSettings`]. Policy negotiation calls
//! [`BalancerConfiguration::update`]; every subscribed observer is then told,
//! in order, on the same thread.

pub mod balancer;
pub mod config;
pub mod observability;

pub use balancer::{BalancerConfiguration, BalancerObserver, LoadBalancerName, SubscriptionId};
pub use config::schema::ClientConfig;
