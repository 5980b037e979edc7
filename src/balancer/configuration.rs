//! Per-channel load balancer configuration.
//!
//! # Responsibilities
//! - Hold the policy the channel should balance with
//! - Notify observers every time the policy is set
//!
//! # Design Decisions
//! - Mutation requires `&mut self`; the owning channel serializes access
//! - Observers run synchronously on the caller's thread, in registration order
//! - Setting the value already held still notifies

use std::fmt;
use std::sync::Arc;

use crate::balancer::name::LoadBalancerName;
use crate::config::schema::BalancerSettings;
use crate::observability::metrics;

/// Receives a signal each time a [`BalancerConfiguration`] is updated.
///
/// The configuration is passed back so the observer can read the new policy.
pub trait BalancerObserver: Send + Sync {
    fn on_update(&self, config: &BalancerConfiguration);
}

impl<F> BalancerObserver for F
where
    F: Fn(&BalancerConfiguration) + Send + Sync,
{
    fn on_update(&self, config: &BalancerConfiguration) {
        self(config)
    }
}

/// Identifies one observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Holds the load balancing policy for a single channel.
pub struct BalancerConfiguration {
    policy: LoadBalancerName,
    /// Registrations in insertion order.
    observers: Vec<(SubscriptionId, Arc<dyn BalancerObserver>)>,
    next_id: u64,
}

impl BalancerConfiguration {
    /// Create a configuration holding `pick_first` with no observers.
    pub fn new() -> Self {
        Self::with_policy(LoadBalancerName::default())
    }

    /// Create a configuration holding an explicit initial policy.
    pub fn with_policy(policy: LoadBalancerName) -> Self {
        Self {
            policy,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a configuration from loaded settings.
    pub fn from_config(settings: &BalancerSettings) -> Self {
        Self::with_policy(settings.default_policy)
    }

    /// The policy currently held.
    pub fn current(&self) -> LoadBalancerName {
        self.policy
    }

    /// Replace the held policy and notify every observer.
    pub fn update(&mut self, policy: LoadBalancerName) {
        let previous = std::mem::replace(&mut self.policy, policy);

        tracing::debug!(
            previous = %previous,
            current = %policy,
            observers = self.observers.len(),
            "Load balancer policy updated"
        );
        metrics::record_policy_update(policy);

        for (_, observer) in &self.observers {
            observer.on_update(self);
        }
    }

    /// Register an observer. Registering the same observer again adds a second registration.
    pub fn subscribe(&mut self, observer: Arc<dyn BalancerObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        tracing::trace!(subscription = id.0, observers = self.observers.len(), "Observer subscribed");
        id
    }

    /// Remove a single registration. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.observers.iter().position(|(sid, _)| *sid == id) else {
            return false;
        };
        self.observers.remove(pos);
        tracing::trace!(subscription = id.0, observers = self.observers.len(), "Observer unsubscribed");
        true
    }

    /// Remove every registration of `observer`, compared by pointer identity.
    /// Returns how many registrations were removed.
    pub fn unsubscribe_observer(&mut self, observer: &Arc<dyn BalancerObserver>) -> usize {
        let target = Arc::as_ptr(observer) as *const ();
        let before = self.observers.len();
        self.observers
            .retain(|(_, registered)| Arc::as_ptr(registered) as *const () != target);
        let removed = before - self.observers.len();
        if removed > 0 {
            tracing::trace!(removed, observers = self.observers.len(), "Observer unsubscribed");
        }
        removed
    }

    /// Number of active registrations.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for BalancerConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BalancerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BalancerConfiguration")
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}
