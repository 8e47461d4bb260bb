//! Name kind definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::names::{filename_with_options, slugify_with_options, NameOptions};

/// The two output forms this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// Filesystem-safe filename with a preserved extension (default).
    #[default]
    Filename,
    /// URL/DNS-safe slug.
    Slug,
}

impl NameKind {
    /// Default options for this kind.
    pub fn default_options(self) -> NameOptions {
        match self {
            NameKind::Filename => NameOptions::filename(),
            NameKind::Slug => NameOptions::slug(),
        }
    }

    /// Build a name of this kind from `input`.
    ///
    /// Only [`NameKind::Filename`] can fail, on inputs containing `/`.
    pub fn apply(self, input: &str, options: &NameOptions) -> Result<String> {
        match self {
            NameKind::Filename => filename_with_options(input, options),
            NameKind::Slug => Ok(slugify_with_options(input, options)),
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Filename => write!(f, "filename"),
            NameKind::Slug => write!(f, "slug"),
        }
    }
}

impl FromStr for NameKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "filename" | "file" => Ok(NameKind::Filename),
            "slug" | "slugify" => Ok(NameKind::Slug),
            _ => Err(format!("Unknown name kind: {}", s)),
        }
    }
}
