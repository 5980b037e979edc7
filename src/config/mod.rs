//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse, deserialize, check)
//!     → ClientConfig (immutable)
//!     → BalancerSettings seeds each channel's BalancerConfiguration
//!     → ObservabilityConfig drives logging setup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Policy names are checked by serde against the closed set
//! - Config is read once; there is no reload

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{BalancerSettings, ClientConfig, LogFormat, ObservabilityConfig};
