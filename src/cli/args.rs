//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::names::NameKind;

/// Filename and slug generator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "safename",
    version,
    about = "Turn arbitrary text into safe filenames and slugs",
    long_about = "Normalize arbitrary text into filesystem-safe filenames or URL/DNS-safe slugs.\n\n\
                  Each output carries a short hash of the original input to avoid collisions.\n\
                  With no INPUT arguments, one input per line is read from stdin."
)]
pub struct Args {
    /// Kind of name to produce.
    #[arg(value_enum)]
    pub kind: NameKindArg,

    /// Inputs to convert. Reads lines from stdin when omitted.
    pub inputs: Vec<String>,

    /// Maximum output length in codepoints.
    #[arg(short, long)]
    pub max_length: Option<usize>,

    /// Hash suffix length (0 disables the suffix).
    #[arg(short = 'H', long)]
    pub hash_length: Option<usize>,

    /// Path to configuration file.
    #[arg(short, long, env = "SAFENAME_CONFIG", default_value = "safename.toml")]
    pub config: PathBuf,

    /// Emit one JSON object per input instead of plain names.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI name kind argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NameKindArg {
    /// Filesystem-safe filename with a preserved extension.
    Filename,
    /// URL/DNS-safe slug.
    Slug,
}

impl From<NameKindArg> for NameKind {
    fn from(arg: NameKindArg) -> Self {
        match arg {
            NameKindArg::Filename => NameKind::Filename,
            NameKindArg::Slug => NameKind::Slug,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        let kind = NameKind::from(self.kind);
        let mut options = config.options_for(kind);

        if let Some(max_length) = self.max_length {
            options.max_length = max_length;
        }

        if let Some(hash_length) = self.hash_length {
            options.hash_length = hash_length;
        }

        config.set_options(kind, options);
    }
}
