//! Configuration module for safename.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Per-kind length defaults
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, FilenameConfig, SlugConfig};
pub use validation::{validate_config, validate_options};
