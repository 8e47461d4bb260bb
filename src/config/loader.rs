//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use crate::names::{
    NameKind, NameOptions, DEFAULT_FILENAME_HASH_LENGTH, DEFAULT_MAX_LENGTH,
    DEFAULT_SLUG_HASH_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filename: FilenameConfig,

    #[serde(default)]
    pub slug: SlugConfig,
}

/// Options for filename generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilenameConfig {
    /// Maximum filename length in codepoints, extension included.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Hash suffix length (0 disables the suffix).
    #[serde(default = "default_filename_hash_length")]
    pub hash_length: usize,
}

/// Options for slug generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugConfig {
    /// Maximum slug length in codepoints.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Hash suffix length (0 disables the suffix).
    #[serde(default = "default_slug_hash_length")]
    pub hash_length: usize,
}

impl Default for FilenameConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            hash_length: default_filename_hash_length(),
        }
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            hash_length: default_slug_hash_length(),
        }
    }
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_filename_hash_length() -> usize {
    DEFAULT_FILENAME_HASH_LENGTH
}

fn default_slug_hash_length() -> usize {
    DEFAULT_SLUG_HASH_LENGTH
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Options for the given name kind.
    pub fn options_for(&self, kind: NameKind) -> NameOptions {
        match kind {
            NameKind::Filename => {
                NameOptions::new(self.filename.max_length, self.filename.hash_length)
            }
            NameKind::Slug => NameOptions::new(self.slug.max_length, self.slug.hash_length),
        }
    }

    /// Override the options for the given name kind.
    pub fn set_options(&mut self, kind: NameKind, options: NameOptions) {
        match kind {
            NameKind::Filename => {
                self.filename.max_length = options.max_length;
                self.filename.hash_length = options.hash_length;
            }
            NameKind::Slug => {
                self.slug.max_length = options.max_length;
                self.slug.hash_length = options.hash_length;
            }
        }
    }
}
