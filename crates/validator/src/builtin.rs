//! Built-in validators and the closed value sets they check against

use crate::field::FieldValue;

pub const NONZERO: &str = "nonzero";
pub const VALID_SCHEME: &str = "validScheme";
pub const VALID_FORMAT: &str = "validFormat";
pub const VALID_TYPE: &str = "validType";

/// Transfer protocols an API may be served over
pub const VALID_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Data type formats for parameters and schemas
pub const VALID_FORMATS: &[&str] = &[
    "int32",
    "int64",
    "float",
    "double",
    "string",
    "byte",
    "boolean",
    "date",
    "date-time",
];

/// Primitive parameter types
pub const VALID_TYPES: &[&str] = &["string", "number", "integer", "boolean", "array", "file"];

fn is_valid_value(value: &str, valid_values: &[&str]) -> bool {
    valid_values.contains(&value)
}

/// Fails if the field holds the zero value of its shape
pub fn nonzero(value: &FieldValue<'_>) -> Result<(), String> {
    if value.is_zero() {
        Err("zero value".to_string())
    } else {
        Ok(())
    }
}

/// Fails unless every scheme is one of [`VALID_SCHEMES`]
///
/// For a sequence, every offending element is listed in the message.
pub fn valid_scheme(value: &FieldValue<'_>) -> Result<(), String> {
    match value {
        FieldValue::Scalar(scheme) => {
            if is_valid_value(scheme, VALID_SCHEMES) {
                Ok(())
            } else {
                Err(format!("invalid url scheme: '{scheme}'"))
            }
        },
        FieldValue::Sequence(schemes) => {
            let bad_schemes: Vec<String> = schemes
                .iter()
                .filter(|scheme| !is_valid_value(scheme, VALID_SCHEMES))
                .map(|scheme| format!("'{scheme}'"))
                .collect();

            if bad_schemes.is_empty() {
                Ok(())
            } else {
                Err(format!("invalid schemes: [{}]", bad_schemes.join(",")))
            }
        },
        other => Err(format!(
            "{VALID_SCHEME} only validates strings or sequences of strings, got {}",
            other.kind()
        )),
    }
}

/// Fails unless the format is empty or one of [`VALID_FORMATS`]
pub fn valid_format(value: &FieldValue<'_>) -> Result<(), String> {
    match value {
        FieldValue::Scalar(format) => {
            if format.is_empty() || is_valid_value(format, VALID_FORMATS) {
                Ok(())
            } else {
                Err(format!("invalid type format: '{format}'"))
            }
        },
        other => Err(format!(
            "{VALID_FORMAT} only validates strings, got {}",
            other.kind()
        )),
    }
}

/// Fails unless the type is one of [`VALID_TYPES`]
pub fn valid_type(value: &FieldValue<'_>) -> Result<(), String> {
    match value {
        FieldValue::Scalar(param_type) => {
            if is_valid_value(param_type, VALID_TYPES) {
                Ok(())
            } else {
                Err(format!("invalid parameter type: '{param_type}'"))
            }
        },
        other => Err(format!(
            "{VALID_TYPE} only validates strings, got {}",
            other.kind()
        )),
    }
}
