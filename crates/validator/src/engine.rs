//! Tree walker applying bound validators to every reachable record

use crate::field::Validate;
use crate::registry::ValidatorRegistry;
use swagger_model_common::{ConfigurationError, FieldViolation, ValidationError, Violations};
use tracing::debug;

/// Validation engine over a [`ValidatorRegistry`]
///
/// Walks fields in declaration order and descends depth-first into
/// sub-records, collecting every violation instead of stopping at the
/// first one. A run never mutates the record or the registry, so repeated
/// runs over the same record produce identical reports.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r ValidatorRegistry,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r ValidatorRegistry) -> Self {
        Self { registry }
    }

    /// Fail on the first validator named by `record`'s binding tables, or by
    /// those of any record type below it, that the registry lacks
    fn resolve(&self, record: &dyn Validate) -> Result<(), ConfigurationError> {
        let tables = std::iter::once(record.bindings())
            .chain(record.nested_bindings().iter().copied());

        for binding in tables.flatten() {
            if let Some(name) = binding
                .validators
                .iter()
                .find(|name| !self.registry.contains(name))
            {
                return Err(ConfigurationError::UnknownValidator {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Collect all violations under `record`
    ///
    /// Paths are relative to `record`: validating a [`Document`] reports
    /// `Info.Title`, validating its `Info` alone reports `Title`.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if a binding of `record`, or of any
    /// record type it can contain, names a validator missing from the
    /// registry, or if a binding names a field the record does not expose.
    /// No partial report is returned in that case.
    ///
    /// [`Document`]: swagger_model_common::Document
    pub fn report(&self, record: &dyn Validate) -> Result<Violations, ConfigurationError> {
        self.resolve(record)?;

        let mut violations = Violations::new();
        self.walk(record, "", &mut violations)?;

        debug!(
            record = record.record_name(),
            violations = violations.len(),
            "validation finished"
        );
        Ok(violations)
    }

    /// Validate `record`, failing with every violation found
    pub fn validate(&self, record: &dyn Validate) -> Result<(), ValidationError> {
        let violations = self.report(record)?;
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Invalid(violations))
        }
    }

    fn walk(
        &self,
        record: &dyn Validate,
        path: &str,
        violations: &mut Violations,
    ) -> Result<(), ConfigurationError> {
        let fields = record.fields();
        let bindings = record.bindings();

        if let Some(binding) = bindings
            .iter()
            .find(|binding| !fields.iter().any(|field| field.name == binding.field))
        {
            return Err(ConfigurationError::UnknownField {
                record: record.record_name(),
                field: binding.field,
            });
        }

        for field in &fields {
            let field_path = if path.is_empty() {
                field.name.to_string()
            } else {
                format!("{path}.{}", field.name)
            };

            let names = bindings
                .iter()
                .filter(|binding| binding.field == field.name)
                .flat_map(|binding| binding.validators.iter());

            for &name in names {
                let validator =
                    self.registry
                        .get(name)
                        .ok_or_else(|| ConfigurationError::UnknownValidator {
                            name: name.to_string(),
                        })?;

                if let Err(message) = validator.validate(&field.value) {
                    debug!(path = %field_path, validator = name, %message, "field violation");
                    violations.push(FieldViolation {
                        path: field_path.clone(),
                        validator: name.to_string(),
                        message,
                    });
                }
            }

            for child in &field.children {
                let child_path = format!("{field_path}{}", child.suffix);
                self.walk(child.record, &child_path, violations)?;
            }
        }

        Ok(())
    }
}
