// formcast-core/src/runtime/mod.rs
// ============================================================================
// Module: Formcast Runtime
// Description: Builders, registries, and the rendering pipeline.
// Purpose: Group the executable half of the crate: everything that turns a
//          validated canonical message into output artifacts.
// Dependencies: jsonschema, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! The runtime assembles the pieces defined by `core` and `interfaces` into
//! the rendering pipeline: the two artifact builders, the mapper registry,
//! the startup-compiled schema validator, and the renderer driving them.

// ============================================================================
// SECTION: Submodules
// ============================================================================

/// Data-validation schema builder.
pub mod data_schema;
/// Format mappers and their registry.
pub mod mapper;
/// Rendering pipeline.
pub mod renderer;
/// Startup-compiled output schema validation.
pub mod schema_validator;
/// UI layout schema builder.
pub mod ui_layout;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use data_schema::DATA_SCHEMA_DIALECT;
pub use data_schema::DataSchemaBuilder;
pub use mapper::CanonicalV1Mapper;
pub use mapper::MapperRegistry;
pub use renderer::FormRenderer;
pub use renderer::RenderError;
pub use renderer::RenderStage;
pub use renderer::RenderedForm;
pub use renderer::RendererConfig;
pub use schema_validator::SchemaLoadError;
pub use schema_validator::SchemaValidator;
pub use ui_layout::UiLayoutBuilder;
