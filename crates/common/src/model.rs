//! Swagger 2.0 document model
//!
//! The tree is built once by the decoder and is read-only afterwards.
//! Absent optional fields decode to their zero value; required-ness is
//! enforced by the validation engine, not by the decoder.
//!
//! Records decode from JSON objects only. An explicit `null` anywhere in the
//! tree decodes to the zero value of its field.

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Decode `null` as the zero value of `T`
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `Deserialize` for records on top of their derived field decoding
///
/// Accepts an object or `null`. The derived impl alone would also fill
/// fields from an array by position.
macro_rules! object_records {
    ($($record:ident => $expecting:literal),* $(,)?) => {$(
        impl<'de> Deserialize<'de> for $record {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct ObjectVisitor;

                impl<'de> Visitor<'de> for ObjectVisitor {
                    type Value = $record;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_unit<E>(self) -> Result<$record, E>
                    where
                        E: de::Error,
                    {
                        Ok($record::default())
                    }

                    fn visit_map<A>(self, map: A) -> Result<$record, A::Error>
                    where
                        A: MapAccess<'de>,
                    {
                        $record::deserialize(de::value::MapAccessDeserializer::new(map))
                    }
                }

                deserializer.deserialize_any(ObjectVisitor)
            }
        }
    )*};
}

object_records! {
    Document => "a swagger document object",
    Info => "an info object",
    Contact => "a contact object",
    License => "a license object",
    Operation => "an operation object",
    Parameter => "a parameter object",
    Items => "an items object",
    Schema => "a schema object",
    Xml => "an xml object",
    ExternalDocumentation => "an external documentation object",
}

/// Swagger document root
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Document {
    /// Format version (e.g., "2.0")
    #[serde(deserialize_with = "nullable")]
    pub swagger: String,

    /// API metadata
    pub info: Info,

    /// Host (name or IP) serving the API
    #[serde(deserialize_with = "nullable")]
    pub host: String,

    /// Base path relative to the host
    #[serde(rename = "basePath", deserialize_with = "nullable")]
    pub base_path: String,

    /// Transfer protocols, in order of preference
    #[serde(deserialize_with = "nullable")]
    pub schemes: Vec<String>,

    /// MIME types the API can consume
    #[serde(deserialize_with = "nullable")]
    pub consumes: Vec<String>,

    /// MIME types the API can produce
    #[serde(deserialize_with = "nullable")]
    pub produces: Vec<String>,

    /// Available paths and their operations
    pub paths: NamedMappings<PathItem>,

    /// Data types produced and consumed by operations
    pub definitions: NamedMappings<Schema>,

    /// Additional external documentation
    #[serde(rename = "externalDocs")]
    pub external_docs: Option<ExternalDocumentation>,
}

/// API information
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Info {
    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub description: String,

    #[serde(rename = "termsOfService", deserialize_with = "nullable")]
    pub terms_of_service: String,

    pub contact: Option<Contact>,

    pub license: Option<License>,

    /// Version of the described API (not of the Swagger format)
    #[serde(deserialize_with = "nullable")]
    pub version: String,
}

/// Contact information for the exposed API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Contact {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
}

/// License information for the exposed API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct License {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

/// Operations available on a single path
///
/// Keys other than `$ref`, `parameters` and `x-*` extensions are decoded as
/// operations keyed by HTTP verb, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// External definition of this path item (`$ref`)
    pub reference: String,

    /// Parameters shared by every operation on this path
    pub parameters: Vec<Parameter>,

    /// Operations keyed by verb (e.g., "get", "post")
    pub operations: IndexMap<String, Operation>,

    /// Vendor extensions (`x-*`), kept verbatim
    pub extensions: IndexMap<String, Value>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PathItemVisitor;

        impl<'de> Visitor<'de> for PathItemVisitor {
            type Value = PathItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a path item object")
            }

            fn visit_unit<E>(self) -> Result<PathItem, E>
            where
                E: de::Error,
            {
                Ok(PathItem::default())
            }

            fn visit_map<A>(self, mut map: A) -> Result<PathItem, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut item = PathItem::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "$ref" {
                        item.reference = map.next_value::<Option<_>>()?.unwrap_or_default();
                    } else if key == "parameters" {
                        item.parameters = map.next_value::<Option<_>>()?.unwrap_or_default();
                    } else if key.starts_with("x-") {
                        let value = map.next_value()?;
                        item.extensions.insert(key, value);
                    } else {
                        let operation = map.next_value()?;
                        item.operations.insert(key, operation);
                    }
                }
                Ok(item)
            }
        }

        deserializer.deserialize_any(PathItemVisitor)
    }
}

/// A single API operation on a path
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Operation {
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub summary: String,

    #[serde(deserialize_with = "nullable")]
    pub description: String,

    #[serde(rename = "externalDocs", alias = "externalDocumentation")]
    pub external_docs: Option<ExternalDocumentation>,

    /// Unique identifier of the operation
    #[serde(rename = "operationId", deserialize_with = "nullable")]
    pub operation_id: String,

    #[serde(deserialize_with = "nullable")]
    pub consumes: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub produces: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,

    /// Overrides the document-level schemes for this operation
    #[serde(deserialize_with = "nullable")]
    pub schemes: Vec<String>,

    #[serde(deserialize_with = "nullable")]
    pub deprecated: bool,
}

/// Operation parameter
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Parameter {
    #[serde(deserialize_with = "nullable")]
    pub name: String,

    /// Location: query, header, path, body, formData
    #[serde(rename = "in", deserialize_with = "nullable")]
    pub location: String,

    #[serde(deserialize_with = "nullable")]
    pub description: String,

    #[serde(deserialize_with = "nullable")]
    pub required: bool,

    /// Body schema (when `in` is "body")
    pub schema: Option<Box<Schema>>,

    #[serde(rename = "type", deserialize_with = "nullable")]
    pub param_type: String,

    #[serde(deserialize_with = "nullable")]
    pub format: String,

    /// Element type when `type` is "array"
    pub items: Option<Items>,

    #[serde(rename = "collectionFormat", deserialize_with = "nullable")]
    pub collection_format: String,

    pub default: Option<Value>,
}

/// Element type descriptor of an array parameter
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Items {
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub item_type: String,

    #[serde(deserialize_with = "nullable")]
    pub format: String,

    /// Nested element type for arrays of arrays
    pub items: Option<Box<Items>>,

    #[serde(rename = "collectionFormat", deserialize_with = "nullable")]
    pub collection_format: String,

    pub default: Option<Value>,
}

/// Schema definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Schema {
    /// Reference to another schema (`$ref`)
    #[serde(rename = "$ref", deserialize_with = "nullable")]
    pub reference: String,

    #[serde(deserialize_with = "nullable")]
    pub format: String,

    #[serde(deserialize_with = "nullable")]
    pub title: String,

    #[serde(deserialize_with = "nullable")]
    pub description: String,

    pub default: Option<Value>,

    #[serde(deserialize_with = "nullable")]
    pub discriminator: String,

    #[serde(rename = "readOnly", deserialize_with = "nullable")]
    pub read_only: bool,

    pub xml: Option<Xml>,

    #[serde(rename = "type", deserialize_with = "nullable")]
    pub schema_type: String,

    /// Names of required properties
    #[serde(deserialize_with = "nullable")]
    pub required: Vec<String>,

    /// Element schema (for array type)
    pub items: Option<Box<Schema>>,

    /// Properties (for object type)
    #[serde(deserialize_with = "nullable")]
    pub properties: IndexMap<String, Schema>,
}

/// XML representation hints for a schema
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct Xml {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub namespace: String,
    #[serde(deserialize_with = "nullable")]
    pub prefix: String,
    #[serde(deserialize_with = "nullable")]
    pub attribute: bool,
    #[serde(deserialize_with = "nullable")]
    pub wrapped: bool,
}

/// Reference to external documentation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct ExternalDocumentation {
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

/// Ordered sequence of name → value mappings
///
/// Decodes from either a single JSON object or an array of objects. Names
/// and mappings keep their document order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMappings<T>(Vec<IndexMap<String, T>>);

impl<T> NamedMappings<T> {
    pub fn new(mappings: Vec<IndexMap<String, T>>) -> Self {
        Self(mappings)
    }

    /// The underlying mappings, in document order
    pub fn mappings(&self) -> &[IndexMap<String, T>] {
        &self.0
    }

    /// Total number of named entries across all mappings
    pub fn len(&self) -> usize {
        self.0.iter().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every `(name, value)` entry in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0
            .iter()
            .flat_map(|mapping| mapping.iter().map(|(name, value)| (name.as_str(), value)))
    }

    /// First entry with the given name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.0.iter().find_map(|mapping| mapping.get(name))
    }
}

impl<T> Default for NamedMappings<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for NamedMappings<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MappingsVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for MappingsVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = NamedMappings<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object or an array of objects")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(NamedMappings::default())
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mapping = IndexMap::deserialize(de::value::MapAccessDeserializer::new(map))?;
                Ok(NamedMappings(vec![mapping]))
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mappings = Vec::deserialize(de::value::SeqAccessDeserializer::new(seq))?;
                Ok(NamedMappings(mappings))
            }
        }

        deserializer.deserialize_any(MappingsVisitor(PhantomData))
    }
}

impl Document {
    /// Iterate over every operation as `(path, method, operation)` in
    /// document order
    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations
                .iter()
                .map(move |(method, operation)| (path, method.as_str(), operation))
        })
    }

    /// Look up a schema in `definitions` by name
    pub fn definition(&self, name: &str) -> Option<&Schema> {
        self.definitions.get(name)
    }
}
