// formcast-core/src/lib.rs
// ============================================================================
// Module: Formcast Core Library
// Description: Public API surface for the Formcast rendering core.
// Purpose: Expose the canonical model, interfaces, and rendering runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Formcast turns a canonical form definition into two artifacts per call: a
//! data-validation schema describing field types, constraints, and read-only
//! gating for a requesting role, and a UI layout schema describing control
//! arrangement. Rendering is deterministic, synchronous, and stateless beyond
//! two startup-initialized read-only caches, so concurrent calls need no
//! coordination.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::FormatMapper;
pub use interfaces::LabelResolver;
pub use interfaces::MapLabelResolver;
pub use interfaces::NullLabelResolver;
pub use interfaces::TargetFormat;
pub use runtime::CanonicalV1Mapper;
pub use runtime::DATA_SCHEMA_DIALECT;
pub use runtime::DataSchemaBuilder;
pub use runtime::FormRenderer;
pub use runtime::MapperRegistry;
pub use runtime::RenderError;
pub use runtime::RenderStage;
pub use runtime::RenderedForm;
pub use runtime::RendererConfig;
pub use runtime::SchemaLoadError;
pub use runtime::SchemaValidator;
pub use runtime::UiLayoutBuilder;
