//! Validator registry: validator name → validator function

use crate::builtin;
use crate::field::FieldValue;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use swagger_model_common::ConfigurationError;
use tracing::trace;

/// Rule applied to a single field value
///
/// Returns `Err(message)` with a human-readable description when the value
/// violates the rule. Any `Fn(&FieldValue) -> Result<(), String>` closure
/// that is `Send + Sync` is a validator.
#[cfg_attr(test, mockall::automock)]
pub trait FieldValidator: Send + Sync {
    fn validate<'a>(&self, value: &FieldValue<'a>) -> Result<(), String>;
}

impl<F> FieldValidator for F
where
    F: Fn(&FieldValue<'_>) -> Result<(), String> + Send + Sync,
{
    fn validate<'a>(&self, value: &FieldValue<'a>) -> Result<(), String> {
        self(value)
    }
}

/// Lookup table from validator name to validator
///
/// Built by the caller and passed to the engine explicitly. Once set up it
/// is only read, so a single registry can be shared between concurrent
/// validation runs (it is `Clone`, `Send` and `Sync`).
#[derive(Clone)]
pub struct ValidatorRegistry {
    validators: BTreeMap<String, Arc<dyn FieldValidator>>,
}

impl ValidatorRegistry {
    /// Registry without any validators, not even `nonzero`
    pub fn empty() -> Self {
        Self {
            validators: BTreeMap::new(),
        }
    }

    /// Registry holding only the built-in `nonzero` validator
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.insert(builtin::NONZERO, builtin::nonzero);
        registry
    }

    /// Registry holding `nonzero`, `validScheme`, `validFormat` and
    /// `validType`
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.insert(builtin::VALID_SCHEME, builtin::valid_scheme);
        registry.insert(builtin::VALID_FORMAT, builtin::valid_format);
        registry.insert(builtin::VALID_TYPE, builtin::valid_type);
        registry
    }

    /// Register a validator under `name`, replacing any previous one
    ///
    /// # Errors
    /// Returns [`ConfigurationError::EmptyValidatorName`] if `name` is empty.
    pub fn register<V>(
        &mut self,
        name: impl Into<String>,
        validator: V,
    ) -> Result<(), ConfigurationError>
    where
        V: FieldValidator + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyValidatorName);
        }

        self.insert(name, validator);
        Ok(())
    }

    fn insert<V>(&mut self, name: impl Into<String>, validator: V)
    where
        V: FieldValidator + 'static,
    {
        let name = name.into();
        trace!(validator = %name, "registering validator");
        if self.validators.insert(name.clone(), Arc::new(validator)).is_some() {
            trace!(validator = %name, "replaced existing validator");
        }
    }

    /// Look up a validator by name
    pub fn get(&self, name: &str) -> Option<&dyn FieldValidator> {
        self.validators.get(name).map(|v| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.validators.keys().map(String::as_str)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
