//! Integration tests: decode then validate whole documents

use pretty_assertions::assert_eq;
use std::sync::Arc;
use swagger_model_parser::decode_str;
use swagger_model_validator::builtin::{self, VALID_SCHEMES};
use swagger_model_validator::{
    report, validate, ConfigurationError, Document, FieldValue, ValidationError,
    ValidatorRegistry,
};

const PETSTORE: &str = r##"{
    "swagger": "2.0",
    "info": {
        "title": "Swagger Petstore",
        "version": "1.0.0",
        "contact": {"name": "API Team"},
        "license": {"name": "MIT"}
    },
    "host": "petstore.swagger.io",
    "basePath": "/api",
    "schemes": ["https", "http", "ws", "wss"],
    "paths": {
        "/pets": {
            "get": {
                "operationId": "findPets",
                "externalDocs": {"url": "https://swagger.io/about"},
                "parameters": [
                    {
                        "name": "tags",
                        "in": "query",
                        "type": "array",
                        "items": {"type": "string"},
                        "collectionFormat": "csv"
                    },
                    {"name": "limit", "in": "query", "type": "integer", "format": "int32"}
                ]
            },
            "post": {
                "operationId": "addPet",
                "schemes": ["https"],
                "parameters": [
                    {
                        "name": "pet",
                        "in": "body",
                        "type": "string",
                        "schema": {"$ref": "#/definitions/Pet"}
                    }
                ]
            }
        }
    },
    "definitions": {
        "Pet": {
            "type": "object",
            "properties": {
                "id": {"type": "integer", "format": "int64"},
                "born": {"type": "string", "format": "date-time"}
            }
        }
    }
}"##;

const BROKEN: &str = r##"{
    "swagger": "",
    "info": {"title": "", "version": "1.0", "license": {"url": "https://example.com"}},
    "schemes": ["http", "ftp", "carrierpigeon"],
    "paths": {
        "/pets": {
            "parameters": [{"name": "", "in": "query", "type": "string"}],
            "get": {
                "externalDocs": {"description": "missing url"},
                "schemes": ["wss", "gopher"],
                "parameters": [
                    {
                        "name": "ids",
                        "in": "query",
                        "type": "array",
                        "items": {"type": "object", "format": "uuid"}
                    },
                    {"name": "limit", "in": "", "type": "int", "format": "int32"}
                ]
            }
        }
    },
    "definitions": {
        "Pet": {"properties": {"id": {"format": "long"}}}
    }
}"##;

fn document(json: &str) -> Document {
    decode_str(json).expect("test document should decode")
}

fn with_schemes(schemes: &[&str]) -> Document {
    let mut doc = document(PETSTORE);
    doc.schemes = schemes.iter().map(|s| s.to_string()).collect();
    doc
}

#[test]
fn test_petstore_is_valid() {
    let doc = document(PETSTORE);
    let result = validate(&doc, &ValidatorRegistry::standard());
    assert!(result.is_ok(), "unexpected violations: {:?}", result.err());
}

#[test]
fn test_broken_document_reports_every_violation_in_walk_order() {
    let doc = document(BROKEN);
    let violations = report(&doc, &ValidatorRegistry::standard()).unwrap();

    let reported: Vec<(&str, &str, &str)> = violations
        .iter()
        .map(|v| (v.path.as_str(), v.validator.as_str(), v.message.as_str()))
        .collect();

    assert_eq!(
        reported,
        vec![
            ("Swagger", "nonzero", "zero value"),
            ("Info.Title", "nonzero", "zero value"),
            ("Info.License.Name", "nonzero", "zero value"),
            ("Schemes", "validScheme", "invalid schemes: ['ftp','carrierpigeon']"),
            (r#"Paths[0]["/pets"].Parameters[0].Name"#, "nonzero", "zero value"),
            (
                r#"Paths[0]["/pets"].Operations["get"].ExternalDocs.Url"#,
                "nonzero",
                "zero value"
            ),
            (
                r#"Paths[0]["/pets"].Operations["get"].Parameters[0].Items.Type"#,
                "validType",
                "invalid parameter type: 'object'"
            ),
            (
                r#"Paths[0]["/pets"].Operations["get"].Parameters[0].Items.Format"#,
                "validFormat",
                "invalid type format: 'uuid'"
            ),
            (
                r#"Paths[0]["/pets"].Operations["get"].Parameters[1].In"#,
                "nonzero",
                "zero value"
            ),
            (
                r#"Paths[0]["/pets"].Operations["get"].Parameters[1].Type"#,
                "validType",
                "invalid parameter type: 'int'"
            ),
            (
                r#"Paths[0]["/pets"].Operations["get"].Schemes"#,
                "validScheme",
                "invalid schemes: ['gopher']"
            ),
            (
                r#"Definitions[0]["Pet"].Properties["id"].Format"#,
                "validFormat",
                "invalid type format: 'long'"
            ),
        ]
    );
}

#[test]
fn test_violations_only_name_registered_validators() {
    let registry = ValidatorRegistry::standard();
    let registered: Vec<&str> = registry.names().collect();

    let violations = report(&document(BROKEN), &registry).unwrap();
    assert!(!violations.is_empty());
    for violation in &violations {
        assert!(
            registered.contains(&violation.validator.as_str()),
            "unexpected validator {}",
            violation.validator
        );
    }
}

#[test]
fn test_validation_is_idempotent() {
    let doc = document(BROKEN);
    let registry = ValidatorRegistry::standard();

    let first = validate(&doc, &registry).unwrap_err();
    let second = validate(&doc, &registry).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_scheme_membership_is_exhaustive() {
    let registry = ValidatorRegistry::standard();

    for scheme in VALID_SCHEMES {
        let violations = report(&with_schemes(&[*scheme]), &registry).unwrap();
        assert!(violations.is_empty(), "{scheme} was rejected");
    }

    for scheme in ["ftp", "file", "HTTPS", "", "tcp"] {
        let violations = report(&with_schemes(&["https", scheme]), &registry).unwrap();
        assert_eq!(violations.len(), 1, "{scheme:?}");
        let violation = &violations.violations()[0];
        assert_eq!(violation.path, "Schemes");
        assert_eq!(violation.validator, "validScheme");
        assert_eq!(violation.message, format!("invalid schemes: ['{scheme}']"));
    }
}

#[test]
fn test_sequence_schemes_report_all_bad_elements() {
    let doc = with_schemes(&["http", "ftp", "carrierpigeon"]);
    let violations = report(&doc, &ValidatorRegistry::standard()).unwrap();

    assert_eq!(violations.len(), 1);
    let message = &violations.violations()[0].message;
    assert!(message.contains("ftp"), "{message}");
    assert!(message.contains("carrierpigeon"), "{message}");
}

#[test]
fn test_missing_title_is_reported_on_info_title() {
    let registry = ValidatorRegistry::standard();

    let mut doc = document(PETSTORE);
    doc.info.title.clear();
    let violations = report(&doc, &registry).unwrap();
    assert!(violations
        .iter()
        .any(|v| v.path == "Info.Title" && v.validator == "nonzero"));

    let doc = document(PETSTORE);
    let violations = report(&doc, &registry).unwrap();
    assert!(!violations.iter().any(|v| v.path == "Info.Title"));
}

#[test]
fn test_absent_info_and_paths_are_zero_values() {
    let doc = document(r#"{"swagger": "2.0"}"#);
    let violations = report(&doc, &ValidatorRegistry::standard()).unwrap();

    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, vec!["Info.Title", "Info.Version", "Paths"]);
}

#[test]
fn test_unregistered_validators_fail_instead_of_skipping() {
    let doc = document(PETSTORE);

    let result = validate(&doc, &ValidatorRegistry::empty());
    assert_eq!(
        result,
        Err(ValidationError::Configuration(
            ConfigurationError::UnknownValidator {
                name: "nonzero".to_string()
            }
        ))
    );

    let result = validate(&doc, &ValidatorRegistry::new());
    assert_eq!(
        result,
        Err(ValidationError::Configuration(
            ConfigurationError::UnknownValidator {
                name: "validScheme".to_string()
            }
        ))
    );
}

#[test]
fn test_unregistered_validator_fails_even_without_matching_fields() {
    let mut registry = ValidatorRegistry::new();
    registry
        .register("validScheme", builtin::valid_scheme)
        .unwrap();

    let doc = document(
        r#"{
            "swagger": "2.0",
            "info": {"title": "Pets", "version": "1.0"},
            "schemes": ["https"],
            "paths": {"/pets": {"get": {"operationId": "listPets"}}}
        }"#,
    );
    assert!(doc.operations().all(|(_, _, op)| op.parameters.is_empty()));

    assert_eq!(
        validate(&doc, &registry),
        Err(ValidationError::Configuration(
            ConfigurationError::UnknownValidator {
                name: "validType".to_string()
            }
        ))
    );

    registry
        .register("validType", builtin::valid_type)
        .unwrap();
    assert_eq!(
        validate(&doc, &registry),
        Err(ValidationError::Configuration(
            ConfigurationError::UnknownValidator {
                name: "validFormat".to_string()
            }
        ))
    );
}

#[test]
fn test_custom_validator_overrides_builtin() {
    let mut registry = ValidatorRegistry::standard();
    registry
        .register("validScheme", |value: &FieldValue<'_>| match value {
            FieldValue::Sequence(schemes) if schemes.iter().any(|s| s == "http") => {
                Err("plain http is not allowed".to_string())
            },
            _ => Ok(()),
        })
        .unwrap();

    let violations = report(&document(PETSTORE), &registry).unwrap();
    let reported: Vec<(&str, &str)> = violations
        .iter()
        .map(|v| (v.path.as_str(), v.message.as_str()))
        .collect();
    assert_eq!(reported, vec![("Schemes", "plain http is not allowed")]);
}

#[test]
fn test_sub_records_validate_on_their_own() {
    let doc = document(BROKEN);
    let registry = ValidatorRegistry::standard();

    let violations = report(&doc.info, &registry).unwrap();
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, vec!["Title", "License.Name"]);

    let (_, _, get) = doc.operations().next().unwrap();
    let violations = report(&get.parameters[1], &registry).unwrap();
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(paths, vec!["In", "Type"]);
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(ValidatorRegistry::standard());
    let docs = [document(PETSTORE), document(BROKEN)];

    std::thread::scope(|scope| {
        let handles: Vec<_> = docs
            .iter()
            .map(|doc| {
                let registry = Arc::clone(&registry);
                scope.spawn(move || report(doc, &registry).map(|v| v.len()))
            })
            .collect();

        let counts: Vec<usize> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(counts, vec![0, 12]);
    });
}
