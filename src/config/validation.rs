//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::names::{NameKind, NameOptions};
use crate::sanitize::HASH_HEX_LEN;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_options(NameKind::Filename, &config.options_for(NameKind::Filename))?;
    validate_options(NameKind::Slug, &config.options_for(NameKind::Slug))?;

    Ok(())
}

/// Validate the length options for one name kind.
///
/// The naming functions accept any values; this only rejects settings that
/// are almost certainly mistakes in a config file.
pub fn validate_options(kind: NameKind, options: &NameOptions) -> Result<()> {
    if options.max_length == 0 {
        return Err(Error::ConfigValidation {
            field: format!("{}.max_length", kind),
            message: "Maximum length must be at least 1".to_string(),
        });
    }

    if options.hash_length > HASH_HEX_LEN {
        return Err(Error::ConfigValidation {
            field: format!("{}.hash_length", kind),
            message: format!(
                "Hash length must be at most {} (got {})",
                HASH_HEX_LEN, options.hash_length
            ),
        });
    }

    if options.hash_length > options.max_length {
        tracing::warn!(
            "{}.hash_length ({}) exceeds max_length ({}); the hash will be shortened",
            kind,
            options.hash_length,
            options.max_length
        );
    }

    Ok(())
}
