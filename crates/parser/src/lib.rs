//! Swagger 2.0 document decoding
//!
//! This crate turns JSON bytes into the typed [`Document`] tree defined in
//! `swagger-model-common`. Decoding is a pure function of its input: it
//! tolerates absent optional fields, preserves the order of every sequence
//! and mapping, and never checks field constraints. Constraint checking is
//! the job of `swagger-model-validator`, run as a separate pass.
//!
//! ## Usage
//! ```rust
//! use swagger_model_parser::decode;
//!
//! let doc = decode(br#"{"swagger": "2.0", "schemes": ["https", "http"]}"#).unwrap();
//! assert_eq!(doc.schemes, vec!["https", "http"]);
//! ```

mod decoder;
mod parser;

pub use decoder::{decode, decode_str};
pub use parser::{load_file, SwaggerParser};

pub use swagger_model_common::{DecodeError, DecodeErrorKind, Document};
