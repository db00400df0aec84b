//! JSON bytes → [`Document`] decoding

use serde_json::error::Category;
use swagger_model_common::{DecodeError, Document};
use tracing::debug;

/// Decode a Swagger document from JSON bytes
///
/// Absent optional fields become zero values; no validation is performed.
///
/// # Errors
/// * [`DecodeError::Syntax`] if `bytes` is not valid JSON (including
///   truncated input), carrying the byte offset where decoding stopped
/// * [`DecodeError::TypeMismatch`] if the JSON shape does not fit the
///   document model, carrying the wire path of the offending field
pub fn decode(bytes: &[u8]) -> Result<Document, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let document: Document = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let field = err.path().to_string();
        classify(bytes, err.into_inner(), field)
    })?;

    // Trailing garbage after the root value
    deserializer
        .end()
        .map_err(|err| classify(bytes, err, String::new()))?;

    debug!(
        swagger = %document.swagger,
        title = %document.info.title,
        paths = document.paths.len(),
        definitions = document.definitions.len(),
        "decoded swagger document"
    );

    Ok(document)
}

/// Decode a Swagger document from a JSON string
pub fn decode_str(json: &str) -> Result<Document, DecodeError> {
    decode(json.as_bytes())
}

fn classify(input: &[u8], err: serde_json::Error, field: String) -> DecodeError {
    let decoded = match err.classify() {
        Category::Data => DecodeError::TypeMismatch {
            field,
            message: err.to_string(),
        },
        Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax {
            offset: byte_offset(input, err.line(), err.column()),
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        },
    };

    debug!(kind = ?decoded.kind(), error = %decoded, "failed to decode swagger document");
    decoded
}

/// Convert serde_json's 1-based line and byte column into an offset into
/// `input`, clamped to the input length.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        input
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte == b'\n')
            .nth(line - 2)
            .map_or(input.len(), |(index, _)| index + 1)
    };

    line_start.saturating_add(column).min(input.len())
}
