//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! BalancerConfiguration::update
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (policy update counter)
//!     → observer.rs (LoggingObserver, a diagnostics sink)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus recorder, when one is installed
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics go through the `metrics` facade and are no-ops without a recorder
//! - Nothing here installs global state unless asked to

pub mod logging;
pub mod metrics;
pub mod observer;

pub use logging::{init_logging, LoggingError};
pub use observer::LoggingObserver;
