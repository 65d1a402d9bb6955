//! JSON rendering for document results.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::model::DocumentResult;

/// Indentation used for pretty output files.
const PRETTY_INDENT: &[u8] = b"    ";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with four-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Write a result as JSON to any writer.
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn write_json<W: Write>(writer: W, result: &DocumentResult, format: JsonFormat) -> Result<()> {
    let outcome = match format {
        JsonFormat::Pretty => {
            let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut serializer = Serializer::with_formatter(writer, formatter);
            result.serialize(&mut serializer)
        }
        JsonFormat::Compact => serde_json::to_writer(writer, result),
    };

    outcome.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a result to a JSON string.
pub fn to_json(result: &DocumentResult, format: JsonFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(&mut buffer, result, format)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(format!("invalid UTF-8: {}", e)))
}
