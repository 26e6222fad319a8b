//! Host-side contract shared by every content source.
//!
//! This crate provides the pieces a host and its sources agree on:
//! - Content model (listings, details, chapters, pages)
//! - Filter declarations and selections
//! - The `Source` capability trait
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod filters;
pub mod logging;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, YifferConfig};
pub use filters::{Filter, FilterValue};
pub use logging::LogConfig;
pub use models::*;
pub use source::{Source, SourceInfo};

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
