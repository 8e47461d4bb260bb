//! safename - safe filenames and slugs from arbitrary text
//!
//! This library normalizes user-supplied strings into two restricted forms:
//! filesystem-safe filenames and URL/DNS-safe slugs. Every function is pure;
//! nothing here touches the filesystem or keeps state between calls.
//!
//! # Features
//!
//! - Unicode to ASCII transliteration (`café` -> `cafe`)
//! - Dash-delimited normalization of whitespace, underscores and symbols
//! - Extension chains preserved and lowercased (`.tar.gz`)
//! - Length budgets counted in codepoints, hash and extension included
//! - A SHA-256 suffix of the original input for collision resistance
//!
//! # Example
//!
//! ```
//! use safename::{filename, slugify};
//!
//! assert_eq!(filename("My Report.PDF").unwrap(), "My-Report-ed2b5ed.pdf");
//! assert_eq!(slugify("Hello World"), "Hello-World-a591a6");
//! assert!(filename("a/b").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod names;
pub mod output;
pub mod sanitize;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use names::{
    filename, filename_with_options, slugify, slugify_with_options, NameKind, NameOptions,
};
