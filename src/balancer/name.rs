//! Load-balancing policy names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of load-balancing policies a channel can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadBalancerName {
    /// Try addresses in order and stick with the first that connects.
    #[default]
    PickFirst,
    /// Rotate requests across all ready addresses.
    RoundRobin,
}

impl LoadBalancerName {
    /// Every known policy.
    pub const ALL: [LoadBalancerName; 2] = [LoadBalancerName::PickFirst, LoadBalancerName::RoundRobin];

    /// Canonical policy name, as used in service configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadBalancerName::PickFirst => "pick_first",
            LoadBalancerName::RoundRobin => "round_robin",
        }
    }
}

impl fmt::Display for LoadBalancerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a policy name is outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown load balancing policy: {name:?}")]
pub struct UnknownPolicyError {
    pub name: String,
}

impl FromStr for LoadBalancerName {
    type Err = UnknownPolicyError;

    /// Accepts `pick_first` / `round_robin` (any case) and the variant spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "pick_first" | "pickfirst" => Ok(LoadBalancerName::PickFirst),
            "round_robin" | "roundrobin" => Ok(LoadBalancerName::RoundRobin),
            _ => Err(UnknownPolicyError {
                name: trimmed.to_string(),
            }),
        }
    }
}
