//! Recall Observability - logging setup and span helpers shared by recall crates
//!
//! # Quick Start
//!
//! ```no_run
//! use recall_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("recall").with_log_level("info,recall_llm=debug");
//! init(config)?;
//!
//! // Or initialize from environment variables
//! // recall_observability::init_from_env()?;
//!
//! tracing::info!("Service started");
//! # Ok::<(), recall_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `RECALL_SERVICE_NAME` - Service name
//! - `RECALL_LOG` or `RUST_LOG` - Log level filter
//! - `NO_COLOR` - Disable ANSI colors

pub mod config;
pub mod error;
pub mod spans;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use spans::{record_duration, record_error};
pub use telemetry::{build_filter, init, init_from_env};
