//! Field-level validation of Swagger documents
//!
//! This crate checks a decoded [`Document`] against named field validators
//! and reports every violation in one pass.
//!
//! ## Validation Model
//!
//! Each record type carries a static binding table mapping field
//! identifiers to an ordered list of validator names. The engine walks the
//! tree depth-first, resolves each field into a [`FieldValue`] and
//! dispatches to the validators looked up in a caller-supplied
//! [`ValidatorRegistry`]:
//!
//! | Validator | Rule |
//! |---|---|
//! | `nonzero` | fails on the zero value (empty string, `false`, no entries) |
//! | `validScheme` | every scheme ∈ {http, https, ws, wss}; lists all offenders |
//! | `validFormat` | empty, or ∈ {int32, int64, float, double, string, byte, boolean, date, date-time} |
//! | `validType` | ∈ {string, number, integer, boolean, array, file} |
//!
//! A binding naming an unregistered validator aborts the run with
//! [`ConfigurationError::UnknownValidator`].
//!
//! ## Usage
//! ```rust
//! use swagger_model_parser::decode;
//! use swagger_model_validator::{validate, ValidatorRegistry};
//!
//! let doc = decode(br#"{"swagger": "2.0", "schemes": ["ftp"]}"#).unwrap();
//! let err = validate(&doc, &ValidatorRegistry::standard()).unwrap_err();
//! let violations = err.violations().unwrap();
//! assert!(violations.iter().any(|v| v.path == "Info.Title"));
//! assert!(violations.iter().any(|v| v.validator == "validScheme"));
//! ```

mod bindings;
pub mod builtin;
mod engine;
mod field;
mod registry;

pub use engine::Validator;
pub use field::{Binding, Child, Field, FieldValue, Validate};
pub use registry::{FieldValidator, ValidatorRegistry};

pub use swagger_model_common::{
    ConfigurationError, Document, FieldViolation, ValidationError, Violations,
};

/// Validate `record` against the validators in `registry`
///
/// Returns `Ok(())` when no violation is found, every violation otherwise.
pub fn validate(record: &dyn Validate, registry: &ValidatorRegistry) -> Result<(), ValidationError> {
    Validator::new(registry).validate(record)
}

/// Collect the (possibly empty) list of violations under `record`
pub fn report(
    record: &dyn Validate,
    registry: &ValidatorRegistry,
) -> Result<Violations, ConfigurationError> {
    Validator::new(registry).report(record)
}
