//! JSON line output.

use serde::Serialize;

use crate::error::Result;

/// One processed input, as emitted with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    pub input: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Record<'a> {
    /// Build a record from the outcome of naming `input`.
    pub fn from_result(input: &'a str, result: &Result<String>) -> Self {
        match result {
            Ok(name) => Self {
                input,
                output: Some(name.clone()),
                error: None,
            },
            Err(e) => Self {
                input,
                output: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Print a record as a single JSON line on stdout.
pub fn print_record(record: &Record<'_>) -> Result<()> {
    println!("{}", serde_json::to_string(record)?);
    Ok(())
}
