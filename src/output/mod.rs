//! Output module for the `safename` binary.
//!
//! Provides:
//! - Colored console output
//! - JSON line records

pub mod console;
pub mod json;

pub use console::{print_error, print_name};
pub use json::{print_record, Record};
