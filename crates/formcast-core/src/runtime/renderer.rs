// formcast-core/src/runtime/renderer.rs
// ============================================================================
// Module: Form Renderer
// Description: Single-pass rendering pipeline over canonical form messages.
// Purpose: Drive structural validation, mapping, output validation, and
//          artifact building for one render call.
// Dependencies: serde, serde_json, thiserror, tracing, crate::core,
//              crate::interfaces, crate::runtime
// ============================================================================

//! ## Overview
//! A render call progresses linearly through the stages `RECEIVED`,
//! `STRUCTURALLY_VALIDATED`, `MAPPED`, `OUTPUT_VALIDATED`, and `DONE`, or
//! fails at a gate with one typed error; there are no retries and no partial
//! results. The renderer itself is stateless beyond its two startup caches
//! (the mapper registry and the compiled output schemas), so concurrent calls
//! need no locking.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::core::CanonicalFormMessage;
use crate::core::ConstraintViolation;
use crate::core::RoleToken;
use crate::core::validate_message;
use crate::interfaces::LabelResolver;
use crate::interfaces::TargetFormat;
use crate::runtime::data_schema::DataSchemaBuilder;
use crate::runtime::mapper::MapperRegistry;
use crate::runtime::schema_validator::SchemaLoadError;
use crate::runtime::schema_validator::SchemaValidator;
use crate::runtime::ui_layout::UiLayoutBuilder;

// ============================================================================
// SECTION: Render Stage
// ============================================================================

/// Stages a render call moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RenderStage {
    /// Call accepted, nothing checked yet.
    Received,
    /// Structural constraints hold.
    StructurallyValidated,
    /// Canonical message mapped to the output document.
    Mapped,
    /// Output document passed the format schema.
    OutputValidated,
    /// Artifacts built; call complete.
    Done,
}

impl RenderStage {
    /// Returns the stable uppercase label for the stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "RECEIVED",
            Self::StructurallyValidated => "STRUCTURALLY_VALIDATED",
            Self::Mapped => "MAPPED",
            Self::OutputValidated => "OUTPUT_VALIDATED",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Render Error
// ============================================================================

/// Typed failure of one render call.
///
/// Every variant maps to a stable machine code via [`RenderError::code`] and
/// carries its structured sub-errors in order via [`RenderError::details`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The canonical message violates structural constraints.
    #[error("canonical message failed structural validation with {} violation(s)", details.len())]
    StructuralValidation {
        /// One entry per violated constraint, in walk order.
        details: Vec<ConstraintViolation>,
    },
    /// No mapper is registered for the requested format.
    #[error("no mapper is registered for target format {format}")]
    NoMapper {
        /// The unresolvable format.
        format: TargetFormat,
    },
    /// The mapped output document fails the format's schema.
    #[error("mapped output failed schema validation with {} violation(s)", details.len())]
    SchemaValidation {
        /// One entry per schema violation, in document order.
        details: Vec<ConstraintViolation>,
    },
    /// The requested format has no compiled schema.
    #[error(transparent)]
    NoSchema(#[from] SchemaLoadError),
}

impl RenderError {
    /// Returns the stable machine code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::StructuralValidation { .. } => "ERR_BEAN_VALIDATION",
            Self::NoMapper { .. } => "ERR_NO_MAPPER",
            Self::SchemaValidation { .. } => "ERR_SCHEMA_VALIDATION",
            Self::NoSchema(_) => "ERR_NO_SCHEMA",
        }
    }

    /// Returns the ordered structured sub-errors, empty when the variant
    /// carries none.
    #[must_use]
    pub fn details(&self) -> &[ConstraintViolation] {
        match self {
            Self::StructuralValidation {
                details,
            }
            | Self::SchemaValidation {
                details,
            } => details,
            Self::NoMapper { .. } | Self::NoSchema(_) => &[],
        }
    }
}

// ============================================================================
// SECTION: Rendered Form
// ============================================================================

/// The finished pair of artifacts plus the validated canonical document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedForm {
    /// Mapped canonical document, as validated against the format schema.
    pub canonical: Value,
    /// Data-validation schema derived for the requesting role.
    pub data_schema: Value,
    /// UI layout schema derived from the layout tree.
    pub ui_layout: Value,
}

// ============================================================================
// SECTION: Renderer Config
// ============================================================================

/// Construction-time configuration for [`FormRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Formats to compile schemas for; defaults to every known format.
    pub formats: Vec<TargetFormat>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            formats: TargetFormat::ALL.to_vec(),
        }
    }
}

// ============================================================================
// SECTION: Renderer
// ============================================================================

/// Rendering pipeline over canonical form messages.
///
/// Construction performs all I/O (schema compilation); render calls are pure
/// and safe to invoke concurrently.
pub struct FormRenderer {
    /// Format-to-mapper registry, read-only after construction.
    mappers: MapperRegistry,
    /// Compiled output schemas, read-only after construction.
    schemas: SchemaValidator,
}

impl FormRenderer {
    /// Creates a renderer with the built-in mappers and every bundled
    /// format schema.
    ///
    /// # Errors
    /// Returns [`SchemaLoadError::Invalid`] when a bundled schema document
    /// does not compile.
    pub fn new() -> Result<Self, SchemaLoadError> {
        Self::with_config(&RendererConfig::default())
    }

    /// Creates a renderer compiling schemas for the configured formats only.
    ///
    /// # Errors
    /// Returns [`SchemaLoadError::Invalid`] when a bundled schema document
    /// does not compile.
    pub fn with_config(config: &RendererConfig) -> Result<Self, SchemaLoadError> {
        Ok(Self {
            mappers: MapperRegistry::with_builtin_mappers(),
            schemas: SchemaValidator::new(&config.formats)?,
        })
    }

    /// Creates a renderer from pre-assembled parts.
    #[must_use]
    pub const fn with_parts(mappers: MapperRegistry, schemas: SchemaValidator) -> Self {
        Self {
            mappers,
            schemas,
        }
    }

    /// Renders one canonical message for the given role and target format.
    ///
    /// # Errors
    /// Returns [`RenderError::StructuralValidation`] when the message is
    /// malformed, [`RenderError::NoMapper`] when the format has no registered
    /// mapper, [`RenderError::SchemaValidation`] when the mapped document
    /// fails the format schema, and [`RenderError::NoSchema`] when the format
    /// has no compiled schema.
    pub fn render(
        &self,
        message: &CanonicalFormMessage,
        role: &RoleToken,
        labels: &dyn LabelResolver,
        format: TargetFormat,
    ) -> Result<RenderedForm, RenderError> {
        debug!(
            form_id = %message.form_id,
            %format,
            stage = %RenderStage::Received,
            "render started"
        );

        let violations = validate_message(message);
        if !violations.is_empty() {
            return Err(RenderError::StructuralValidation {
                details: violations,
            });
        }
        debug!(form_id = %message.form_id, stage = %RenderStage::StructurallyValidated, "structural constraints hold");

        let mapper = self
            .mappers
            .resolve(format)
            .ok_or(RenderError::NoMapper {
                format,
            })?;
        let canonical = mapper.map(message);
        debug!(form_id = %message.form_id, stage = %RenderStage::Mapped, "canonical message mapped");

        let violations = self.schemas.validate(&canonical, format)?;
        if !violations.is_empty() {
            return Err(RenderError::SchemaValidation {
                details: violations,
            });
        }
        debug!(form_id = %message.form_id, stage = %RenderStage::OutputValidated, "output document valid");

        let data_schema = DataSchemaBuilder::new(role, labels).build(&message.fields);
        let ui_layout = UiLayoutBuilder::new(labels).build(&message.layout);
        debug!(form_id = %message.form_id, stage = %RenderStage::Done, "artifacts built");

        Ok(RenderedForm {
            canonical,
            data_schema,
            ui_layout,
        })
    }

    /// Renders one message and serializes the result to a JSON string.
    ///
    /// # Errors
    /// Propagates every error [`FormRenderer::render`] can return.
    pub fn render_to_string(
        &self,
        message: &CanonicalFormMessage,
        role: &RoleToken,
        labels: &dyn LabelResolver,
        format: TargetFormat,
    ) -> Result<String, RenderError> {
        let rendered = self.render(message, role, labels, format)?;
        Ok(json!({
            "canonical": rendered.canonical,
            "dataSchema": rendered.data_schema,
            "uiLayout": rendered.ui_layout,
        })
        .to_string())
    }
}
