//! Load-balancing policy selection state.
//!
//! # Data Flow
//! ```text
//! Policy negotiation (owned by the channel)
//!     → configuration.rs (BalancerConfiguration::update)
//!     → held LoadBalancerName replaced
//!     → every registered BalancerObserver notified, in order
//!
//! Channel setup:
//!     → configuration.rs (BalancerConfiguration::current)
//!     → instantiate pick_first / round_robin picker
//! ```
//!
//! # Design Decisions
//! - One configuration per channel, no global state
//! - Closed policy set expressed as an enum, not a string
//! - Notification is synchronous and unconditional (no dedup of equal values)

pub mod configuration;
pub mod name;

pub use configuration::{BalancerConfiguration, BalancerObserver, SubscriptionId};
pub use name::{LoadBalancerName, UnknownPolicyError};
