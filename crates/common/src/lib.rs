//! Common types and utilities for Swagger Model
//!
//! This crate contains the Swagger 2.0 document model and the error types
//! shared by the decoder, the validation engine, and the CLI.

pub mod model;

pub use model::*;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding JSON bytes into a [`Document`]
///
/// Both variants are terminal for the decode attempt: no partial document is
/// ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset into the input where decoding stopped
        offset: usize,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("type mismatch at '{field}': {message}")]
    TypeMismatch {
        /// Dotted wire path of the offending field (e.g. `info.title`)
        field: String,
        message: String,
    },
}

/// Discriminant of a [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    SyntaxError,
    TypeMismatch,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::Syntax { .. } => DecodeErrorKind::SyntaxError,
            DecodeError::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
        }
    }

    /// Byte offset of a syntax error
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::Syntax { offset, .. } => Some(*offset),
            DecodeError::TypeMismatch { .. } => None,
        }
    }

    /// Field path of a type mismatch
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::TypeMismatch { field, .. } => Some(field),
            DecodeError::Syntax { .. } => None,
        }
    }
}

/// Setup errors of the validation engine
///
/// These are programming errors, not data errors: they halt validation
/// because the requested check cannot be performed at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown validator '{name}'")]
    UnknownValidator { name: String },

    #[error("validator name cannot be empty")]
    EmptyValidatorName,

    #[error("record '{record}' has no field '{field}' to bind validators to")]
    UnknownField {
        record: &'static str,
        field: &'static str,
    },
}

/// A single failure of one named validator against one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Dotted path from the validated root (e.g. `Info.Title`)
    pub path: String,
    /// Name of the validator that failed
    pub validator: String,
    /// Human-readable description of the failure
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [{}]", self.path, self.message, self.validator)
    }
}

/// Ordered collection of field violations from one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    violations: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.violations.iter()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.violations
    }
}

impl FromIterator<FieldViolation> for Violations {
    fn from_iter<I: IntoIterator<Item = FieldViolation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = FieldViolation;
    type IntoIter = std::vec::IntoIter<FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a FieldViolation;
    type IntoIter = std::slice::Iter<'a, FieldViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

/// Outcome of a failed validation run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("validator configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("document failed validation with {n} violation(s):\n{0}", n = .0.len())]
    Invalid(Violations),
}

impl ValidationError {
    /// The violations of an `Invalid` outcome
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            ValidationError::Invalid(violations) => Some(violations),
            ValidationError::Configuration(_) => None,
        }
    }
}

/// Errors that can occur while loading and checking a Swagger document
#[derive(Error, Debug)]
pub enum SwaggerError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConfigurationError> for SwaggerError {
    fn from(err: ConfigurationError) -> Self {
        SwaggerError::Validation(ValidationError::Configuration(err))
    }
}

/// Result type for swagger-model operations
pub type Result<T> = std::result::Result<T, SwaggerError>;
