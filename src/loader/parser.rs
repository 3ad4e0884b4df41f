//! Parsers for paging options and executor output

use crate::error::{Error, Result};
use crate::option::PagingOption;
use crate::result::PagingResultCollection;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load a paging option from a YAML or JSON file
///
/// # Examples
///
/// ```ignore
/// let option = load_option("./paging.yaml")?;
/// ```
pub fn load_option(path: impl AsRef<Path>) -> Result<PagingOption> {
    let content = read_file(path.as_ref(), "paging option")?;
    load_option_from_str(&content)
}

/// Load a paging option from a YAML or JSON string
///
/// YAML is a superset of JSON, so one parser handles both.
pub fn load_option_from_str(text: &str) -> Result<PagingOption> {
    if text.trim().is_empty() {
        return Ok(PagingOption::default());
    }

    let option: PagingOption = serde_yaml::from_str(text)
        .map_err(|e| Error::config(format!("Failed to parse paging option: {e}")))?;
    Ok(option.normalize())
}

/// Load executor output from a JSON file
pub fn load_results(path: impl AsRef<Path>) -> Result<PagingResultCollection<Value>> {
    let content = read_file(path.as_ref(), "results")?;
    load_results_from_str(&content)
}

/// Load executor output from a JSON string
pub fn load_results_from_str(text: &str) -> Result<PagingResultCollection<Value>> {
    let value: Value = serde_json::from_str(text)?;
    PagingResultCollection::from_json(value)
}

fn read_file(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            warn!(path = %path.display(), "Failed to read {what} file: {e}");
            Error::Io(e)
        }
    })
}
