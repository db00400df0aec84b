//! Swagger spec file parser

use crate::decoder::decode;
use std::fs;
use std::path::Path;
use swagger_model_common::{Document, Result, SwaggerError};
use tracing::debug;

/// Swagger 2.0 specification parser
///
/// Owns the decoded [`Document`]; the document is read-only once built.
#[derive(Debug, Clone)]
pub struct SwaggerParser {
    document: Document,
}

impl SwaggerParser {
    /// Load a Swagger spec from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SwaggerParser::from_file("petstore.json")?;
    /// println!("{}", parser.document().info.title);
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading swagger document");

        let bytes = fs::read(path).map_err(|source| SwaggerError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_slice(&bytes)
    }

    /// Parse a Swagger spec from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            document: decode(bytes)?,
        })
    }

    /// Parse a Swagger spec from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Get reference to the decoded document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take ownership of the decoded document
    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Read and decode a Swagger document from a file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    SwaggerParser::from_file(path).map(SwaggerParser::into_document)
}
