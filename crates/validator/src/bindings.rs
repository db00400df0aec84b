//! Binding tables for the Swagger document records
//!
//! Each record lists its fields in declaration order and declares which
//! validators apply to which field. Fields missing from a table are walked
//! but never checked.

use crate::builtin::{NONZERO, VALID_FORMAT, VALID_SCHEME, VALID_TYPE};
use crate::field::{Binding, Field, Validate};
use swagger_model_common::{
    Contact, Document, ExternalDocumentation, Info, Items, License, Operation, Parameter,
    PathItem, Schema, Xml,
};

const DOCUMENT_BINDINGS: &[Binding] = &[
    Binding::new("Swagger", &[NONZERO]),
    Binding::new("Schemes", &[VALID_SCHEME]),
    Binding::new("Paths", &[NONZERO]),
];

const INFO_BINDINGS: &[Binding] = &[
    Binding::new("Title", &[NONZERO]),
    Binding::new("Version", &[NONZERO]),
];

const LICENSE_BINDINGS: &[Binding] = &[Binding::new("Name", &[NONZERO])];

const OPERATION_BINDINGS: &[Binding] = &[Binding::new("Schemes", &[VALID_SCHEME])];

const PARAMETER_BINDINGS: &[Binding] = &[
    Binding::new("Name", &[NONZERO]),
    Binding::new("In", &[NONZERO]),
    Binding::new("Type", &[VALID_TYPE]),
    Binding::new("Format", &[VALID_FORMAT]),
];

const ITEMS_BINDINGS: &[Binding] = &[
    Binding::new("Type", &[VALID_TYPE]),
    Binding::new("Format", &[VALID_FORMAT]),
];

const SCHEMA_BINDINGS: &[Binding] = &[Binding::new("Format", &[VALID_FORMAT])];

const EXTERNAL_DOCS_BINDINGS: &[Binding] = &[Binding::new("Url", &[NONZERO])];

const PARAMETER_NESTED: &[&[Binding]] = &[ITEMS_BINDINGS, SCHEMA_BINDINGS];

const OPERATION_NESTED: &[&[Binding]] = &[
    EXTERNAL_DOCS_BINDINGS,
    PARAMETER_BINDINGS,
    ITEMS_BINDINGS,
    SCHEMA_BINDINGS,
];

const PATH_ITEM_NESTED: &[&[Binding]] = &[
    PARAMETER_BINDINGS,
    ITEMS_BINDINGS,
    SCHEMA_BINDINGS,
    OPERATION_BINDINGS,
    EXTERNAL_DOCS_BINDINGS,
];

const DOCUMENT_NESTED: &[&[Binding]] = &[
    INFO_BINDINGS,
    LICENSE_BINDINGS,
    PARAMETER_BINDINGS,
    ITEMS_BINDINGS,
    SCHEMA_BINDINGS,
    OPERATION_BINDINGS,
    EXTERNAL_DOCS_BINDINGS,
];

impl Validate for Document {
    fn record_name(&self) -> &'static str {
        "Document"
    }

    fn bindings(&self) -> &'static [Binding] {
        DOCUMENT_BINDINGS
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        DOCUMENT_NESTED
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Swagger", &self.swagger),
            Field::owned("Info", &self.info),
            Field::scalar("Host", &self.host),
            Field::scalar("BasePath", &self.base_path),
            Field::sequence("Schemes", &self.schemes),
            Field::sequence("Consumes", &self.consumes),
            Field::sequence("Produces", &self.produces),
            Field::named("Paths", &self.paths),
            Field::named("Definitions", &self.definitions),
            Field::optional("ExternalDocs", self.external_docs.as_ref()),
        ]
    }
}

impl Validate for Info {
    fn record_name(&self) -> &'static str {
        "Info"
    }

    fn bindings(&self) -> &'static [Binding] {
        INFO_BINDINGS
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        &[LICENSE_BINDINGS]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Title", &self.title),
            Field::scalar("Description", &self.description),
            Field::scalar("TermsOfService", &self.terms_of_service),
            Field::optional("Contact", self.contact.as_ref()),
            Field::optional("License", self.license.as_ref()),
            Field::scalar("Version", &self.version),
        ]
    }
}

impl Validate for Contact {
    fn record_name(&self) -> &'static str {
        "Contact"
    }

    fn bindings(&self) -> &'static [Binding] {
        &[]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Name", &self.name),
            Field::scalar("Url", &self.url),
            Field::scalar("Email", &self.email),
        ]
    }
}

impl Validate for License {
    fn record_name(&self) -> &'static str {
        "License"
    }

    fn bindings(&self) -> &'static [Binding] {
        LICENSE_BINDINGS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Name", &self.name),
            Field::scalar("Url", &self.url),
        ]
    }
}

impl Validate for PathItem {
    fn record_name(&self) -> &'static str {
        "PathItem"
    }

    fn bindings(&self) -> &'static [Binding] {
        &[]
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        PATH_ITEM_NESTED
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Ref", &self.reference),
            Field::list("Parameters", &self.parameters),
            Field::map("Operations", &self.operations),
            Field::opaque("Extensions", self.extensions.len()),
        ]
    }
}

impl Validate for Operation {
    fn record_name(&self) -> &'static str {
        "Operation"
    }

    fn bindings(&self) -> &'static [Binding] {
        OPERATION_BINDINGS
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        OPERATION_NESTED
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::sequence("Tags", &self.tags),
            Field::scalar("Summary", &self.summary),
            Field::scalar("Description", &self.description),
            Field::optional("ExternalDocs", self.external_docs.as_ref()),
            Field::scalar("OperationId", &self.operation_id),
            Field::sequence("Consumes", &self.consumes),
            Field::sequence("Produces", &self.produces),
            Field::list("Parameters", &self.parameters),
            Field::sequence("Schemes", &self.schemes),
            Field::flag("Deprecated", self.deprecated),
        ]
    }
}

impl Validate for Parameter {
    fn record_name(&self) -> &'static str {
        "Parameter"
    }

    fn bindings(&self) -> &'static [Binding] {
        PARAMETER_BINDINGS
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        PARAMETER_NESTED
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Name", &self.name),
            Field::scalar("In", &self.location),
            Field::scalar("Description", &self.description),
            Field::flag("Required", self.required),
            Field::optional("Schema", self.schema.as_deref()),
            Field::scalar("Type", &self.param_type),
            Field::scalar("Format", &self.format),
            Field::optional("Items", self.items.as_ref()),
            Field::scalar("CollectionFormat", &self.collection_format),
            Field::json("Default", self.default.as_ref()),
        ]
    }
}

impl Validate for Items {
    fn record_name(&self) -> &'static str {
        "Items"
    }

    fn bindings(&self) -> &'static [Binding] {
        ITEMS_BINDINGS
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        &[ITEMS_BINDINGS]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Type", &self.item_type),
            Field::scalar("Format", &self.format),
            Field::optional("Items", self.items.as_deref()),
            Field::scalar("CollectionFormat", &self.collection_format),
            Field::json("Default", self.default.as_ref()),
        ]
    }
}

impl Validate for Schema {
    fn record_name(&self) -> &'static str {
        "Schema"
    }

    fn bindings(&self) -> &'static [Binding] {
        SCHEMA_BINDINGS
    }

    fn nested_bindings(&self) -> &'static [&'static [Binding]] {
        &[SCHEMA_BINDINGS]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Ref", &self.reference),
            Field::scalar("Format", &self.format),
            Field::scalar("Title", &self.title),
            Field::scalar("Description", &self.description),
            Field::json("Default", self.default.as_ref()),
            Field::scalar("Discriminator", &self.discriminator),
            Field::flag("ReadOnly", self.read_only),
            Field::optional("Xml", self.xml.as_ref()),
            Field::scalar("Type", &self.schema_type),
            Field::sequence("Required", &self.required),
            Field::optional("Items", self.items.as_deref()),
            Field::map("Properties", &self.properties),
        ]
    }
}

impl Validate for Xml {
    fn record_name(&self) -> &'static str {
        "Xml"
    }

    fn bindings(&self) -> &'static [Binding] {
        &[]
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Name", &self.name),
            Field::scalar("Namespace", &self.namespace),
            Field::scalar("Prefix", &self.prefix),
            Field::flag("Attribute", self.attribute),
            Field::flag("Wrapped", self.wrapped),
        ]
    }
}

impl Validate for ExternalDocumentation {
    fn record_name(&self) -> &'static str {
        "ExternalDocumentation"
    }

    fn bindings(&self) -> &'static [Binding] {
        EXTERNAL_DOCS_BINDINGS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("Description", &self.description),
            Field::scalar("Url", &self.url),
        ]
    }
}
