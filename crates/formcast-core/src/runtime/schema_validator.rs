// formcast-core/src/runtime/schema_validator.rs
// ============================================================================
// Module: Output Schema Validator
// Description: Startup-compiled JSON Schema validation of mapped output.
// Purpose: Validate mapped documents against the bundled per-format schemas,
//          reporting every violation.
// Dependencies: jsonschema, serde_json, thiserror, crate::core,
//              crate::interfaces
// ============================================================================

//! ## Overview
//! The validator compiles one bundled schema document per supported target
//! format at construction time. Compilation failure is a boot-time error,
//! never deferred to a render call; after construction the cache is immutable
//! and safe for unlimited concurrent reads. Validation collects all
//! violations in document order instead of stopping at the first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use jsonschema::Draft;
use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::core::ConstraintViolation;
use crate::interfaces::TargetFormat;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Boot-time schema loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaLoadError {
    /// The bundled document for a format failed to parse or compile.
    #[error("schema document for format {format} failed to compile: {message}")]
    Invalid {
        /// Format whose document is broken.
        format: TargetFormat,
        /// Compiler or parser diagnostic.
        message: String,
    },
    /// A format was requested that this validator was not built with.
    #[error("no schema document is loaded for format {0}")]
    NotLoaded(TargetFormat),
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Immutable cache of compiled output schemas, one per target format.
#[derive(Debug)]
pub struct SchemaValidator {
    /// Compiled validators keyed by target format.
    validators: BTreeMap<TargetFormat, Validator>,
}

impl SchemaValidator {
    /// Compiles the bundled schema documents for the given formats.
    ///
    /// # Errors
    /// Returns [`SchemaLoadError::Invalid`] when a bundled document does not
    /// parse or does not compile as a Draft 2020-12 schema.
    pub fn new(formats: &[TargetFormat]) -> Result<Self, SchemaLoadError> {
        let mut validators = BTreeMap::new();
        for &format in formats {
            validators.insert(format, compile_document(format, bundled_document(format))?);
        }
        Ok(Self {
            validators,
        })
    }

    /// Compiles caller-supplied schema documents instead of the bundled
    /// ones.
    ///
    /// # Errors
    /// Returns [`SchemaLoadError::Invalid`] when a document does not parse
    /// or does not compile as a Draft 2020-12 schema.
    pub fn with_documents(
        documents: &[(TargetFormat, &str)],
    ) -> Result<Self, SchemaLoadError> {
        let mut validators = BTreeMap::new();
        for &(format, source) in documents {
            validators.insert(format, compile_document(format, source)?);
        }
        Ok(Self {
            validators,
        })
    }

    /// Compiles the schema documents for every known format.
    ///
    /// # Errors
    /// Returns [`SchemaLoadError::Invalid`] when a bundled document does not
    /// compile.
    pub fn with_all_formats() -> Result<Self, SchemaLoadError> {
        Self::new(TargetFormat::ALL)
    }

    /// Validates a mapped document against the schema for a format.
    ///
    /// An empty result means the document is valid. Violations carry the
    /// schema keyword as their code and a JSON-pointer path into the
    /// document.
    ///
    /// # Errors
    /// Returns [`SchemaLoadError::NotLoaded`] when the format was not part of
    /// this validator's construction.
    pub fn validate(
        &self,
        document: &Value,
        format: TargetFormat,
    ) -> Result<Vec<ConstraintViolation>, SchemaLoadError> {
        let validator = self
            .validators
            .get(&format)
            .ok_or(SchemaLoadError::NotLoaded(format))?;
        Ok(validator
            .iter_errors(document)
            .map(|error| {
                ConstraintViolation::new(
                    keyword_code(&error.schema_path().to_string()),
                    error.to_string(),
                    error.instance_path().to_string(),
                )
            })
            .collect())
    }

    /// Returns the formats this validator holds a compiled schema for.
    #[must_use]
    pub fn formats(&self) -> Vec<TargetFormat> {
        self.validators.keys().copied().collect()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses and compiles one schema document for a format.
fn compile_document(format: TargetFormat, source: &str) -> Result<Validator, SchemaLoadError> {
    let document: Value = serde_json::from_str(source).map_err(|err| SchemaLoadError::Invalid {
        format,
        message: err.to_string(),
    })?;
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&document)
        .map_err(|err| SchemaLoadError::Invalid {
            format,
            message: err.to_string(),
        })
}

/// Returns the bundled schema document for a format.
const fn bundled_document(format: TargetFormat) -> &'static str {
    match format {
        TargetFormat::CanonicalFormV1 => {
            include_str!("../../schemas/canonical-form-v1.0.0.schema.json")
        }
    }
}

/// Extracts the violated schema keyword from a schema-location pointer.
///
/// The last non-numeric pointer segment names the keyword (for example
/// `/properties/layout/minItems` yields `minItems`).
fn keyword_code(schema_path: &str) -> String {
    schema_path
        .rsplit('/')
        .find(|segment| !segment.is_empty() && !segment.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or("schema")
        .to_string()
}
