// formcast-core/src/core/mod.rs
// ============================================================================
// Module: Formcast Core Types
// Description: Canonical data model, permissions, and structural validation.
// Purpose: Group the format-agnostic building blocks of the rendering
//          pipeline.
// Dependencies: cond-logic, indexmap, regex, serde, thiserror
// ============================================================================

//! ## Overview
//! The `core` module holds everything the pipeline agrees on before any
//! output format enters the picture: identifiers, the canonical form message,
//! parsed permission grants, conditional rule attachments, and the structural
//! validator that gates rendering.

// ============================================================================
// SECTION: Submodules
// ============================================================================

/// Opaque string identifiers.
pub mod identifiers;
/// Canonical form message model.
pub mod message;
/// Parsed permission grants and edit gating.
pub mod permissions;
/// Conditional rule attachments.
pub mod rules;
/// Structural constraint validation.
pub mod validate;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use identifiers::FormId;
pub use identifiers::RoleToken;
pub use identifiers::SchemaVersion;
pub use message::ArrayField;
pub use message::CanonicalFormMessage;
pub use message::FieldDefinition;
pub use message::LayoutElement;
pub use message::ObjectItem;
pub use message::SimpleField;
pub use message::ValidationRules;
pub use message::DEFAULT_SCHEMA_VERSION;
pub use permissions::has_edit_permission;
pub use permissions::Permission;
pub use permissions::PermissionAction;
pub use permissions::PermissionError;
pub use rules::ValidationAction;
pub use rules::ValidationRule;
pub use rules::VisibilityAction;
pub use rules::VisibilityRule;
pub use validate::validate_message;
pub use validate::ConstraintViolation;
pub use validate::MAX_RULE_DEPTH;
