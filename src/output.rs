//! JSON rendering and file output.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Render a value as JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Render a value as JSON and write it to `path`.
///
/// The whole file is written in one call and any existing file is
/// overwritten. Nothing is written if rendering fails.
pub fn write_json<T, P>(path: P, value: &T, format: JsonFormat) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let json = to_json(value, format)?;
    fs::write(path.as_ref(), json)?;
    log::debug!("Wrote {}", path.as_ref().display());
    Ok(())
}
