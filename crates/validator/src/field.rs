//! Field views and binding tables consulted by the tree walker

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use swagger_model_common::NamedMappings;

/// Value of a single record field as seen by a validator
///
/// The walker resolves the shape of a field before dispatch, so validators
/// match on the variant instead of inspecting types at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// A string field
    Scalar(&'a str),

    /// An ordered sequence of strings (e.g., schemes, MIME types)
    Sequence(&'a [String]),

    /// A boolean field
    Flag(bool),

    /// An arbitrary JSON value such as a default; `None` when absent
    Json(Option<&'a Value>),

    /// A collection of sub-records, by number of entries
    Entries(usize),

    /// An optional sub-record, by presence
    Record(bool),
}

impl FieldValue<'_> {
    /// Whether the value is the zero value of its shape
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Scalar(s) => s.is_empty(),
            FieldValue::Sequence(items) => items.is_empty(),
            FieldValue::Flag(flag) => !flag,
            FieldValue::Json(value) => value.map_or(true, Value::is_null),
            FieldValue::Entries(len) => *len == 0,
            FieldValue::Record(present) => !present,
        }
    }

    /// Short name of the value shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Scalar(_) => "string",
            FieldValue::Sequence(_) => "sequence of strings",
            FieldValue::Flag(_) => "boolean",
            FieldValue::Json(_) => "JSON value",
            FieldValue::Entries(_) => "collection",
            FieldValue::Record(_) => "record",
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Scalar(s) => write!(f, "'{s}'"),
            FieldValue::Sequence(items) => write!(f, "[{}]", items.join(",")),
            FieldValue::Flag(flag) => write!(f, "{flag}"),
            FieldValue::Json(Some(value)) => write!(f, "{value}"),
            FieldValue::Json(None) => f.write_str("null"),
            FieldValue::Entries(len) => write!(f, "{len} entries"),
            FieldValue::Record(present) => {
                f.write_str(if *present { "present" } else { "absent" })
            },
        }
    }
}

/// Validators declared for one field of a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Field identifier, as reported by [`Validate::fields`]
    pub field: &'static str,
    /// Validator names, applied in order
    pub validators: &'static [&'static str],
}

impl Binding {
    pub const fn new(field: &'static str, validators: &'static [&'static str]) -> Self {
        Self { field, validators }
    }
}

/// A record that can be walked by the validation engine
///
/// Implementors expose their fields in declaration order together with a
/// static binding table. Fields without a binding are never checked, but
/// their sub-records are still walked.
pub trait Validate {
    /// Record type name (e.g., "Parameter")
    fn record_name(&self) -> &'static str;

    /// Field → validator bindings for this record type
    fn bindings(&self) -> &'static [Binding];

    /// Binding tables of every record type reachable below this one
    ///
    /// The engine resolves these up front, so a missing validator is
    /// reported even when no such sub-record is present.
    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        &[]
    }

    /// Fields in declaration order
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Sub-record reachable from a field
pub struct Child<'a> {
    /// Appended to the field path (e.g., `[0]` or `["get"]`)
    pub suffix: String,
    pub record: &'a dyn Validate,
}

/// One field of a record: its value and the sub-records it owns
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
    pub children: Vec<Child<'a>>,
}

impl<'a> Field<'a> {
    fn leaf(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            value,
            children: Vec::new(),
        }
    }

    pub fn scalar(name: &'static str, value: &'a str) -> Self {
        Self::leaf(name, FieldValue::Scalar(value))
    }

    pub fn sequence(name: &'static str, values: &'a [String]) -> Self {
        Self::leaf(name, FieldValue::Sequence(values))
    }

    pub fn flag(name: &'static str, value: bool) -> Self {
        Self::leaf(name, FieldValue::Flag(value))
    }

    pub fn json(name: &'static str, value: Option<&'a Value>) -> Self {
        Self::leaf(name, FieldValue::Json(value))
    }

    /// Collection of raw values that is counted but never walked
    pub fn opaque(name: &'static str, len: usize) -> Self {
        Self::leaf(name, FieldValue::Entries(len))
    }

    /// Required sub-record, always present
    pub fn owned<R: Validate>(name: &'static str, record: &'a R) -> Self {
        Self {
            name,
            value: FieldValue::Record(true),
            children: vec![Child {
                suffix: String::new(),
                record,
            }],
        }
    }

    /// Optional sub-record
    pub fn optional<R: Validate>(name: &'static str, record: Option<&'a R>) -> Self {
        Self {
            name,
            value: FieldValue::Record(record.is_some()),
            children: record
                .map(|record| Child {
                    suffix: String::new(),
                    record: record as &dyn Validate,
                })
                .into_iter()
                .collect(),
        }
    }

    /// Ordered sequence of sub-records, walked element by element
    pub fn list<R: Validate>(name: &'static str, records: &'a [R]) -> Self {
        Self {
            name,
            value: FieldValue::Entries(records.len()),
            children: records
                .iter()
                .enumerate()
                .map(|(i, record)| Child {
                    suffix: format!("[{i}]"),
                    record: record as &dyn Validate,
                })
                .collect(),
        }
    }

    /// Name → sub-record mapping, walked in insertion order
    pub fn map<R: Validate>(name: &'static str, records: &'a IndexMap<String, R>) -> Self {
        Self {
            name,
            value: FieldValue::Entries(records.len()),
            children: records
                .iter()
                .map(|(key, record)| Child {
                    suffix: format!("[{key:?}]"),
                    record: record as &dyn Validate,
                })
                .collect(),
        }
    }

    /// Sequence of name → sub-record mappings
    pub fn named<R: Validate>(name: &'static str, mappings: &'a NamedMappings<R>) -> Self {
        Self {
            name,
            value: FieldValue::Entries(mappings.len()),
            children: mappings
                .mappings()
                .iter()
                .enumerate()
                .flat_map(|(i, mapping)| {
                    mapping.iter().map(move |(key, record)| Child {
                        suffix: format!("[{i}][{key:?}]"),
                        record: record as &dyn Validate,
                    })
                })
                .collect(),
        }
    }
}
