// formcast-core/src/runtime/mapper.rs
// ============================================================================
// Module: Mapper Registry
// Description: Built-in format mappers and the format-to-mapper registry.
// Purpose: Resolve a target format to the mapper producing its output
//          document.
// Dependencies: serde_json, crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The registry is assembled once at startup and read-only afterwards. The
//! sole built-in mapper serializes the canonical message one-to-one; the
//! registry exists so future formats whose shape diverges from the canonical
//! tree can be added without touching the pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Value;

use crate::core::CanonicalFormMessage;
use crate::interfaces::FormatMapper;
use crate::interfaces::TargetFormat;

// ============================================================================
// SECTION: Built-in Mapper
// ============================================================================

/// Mapper for [`TargetFormat::CanonicalFormV1`].
///
/// The output document is a structure-preserving serialization of the
/// canonical message; field order and wire names carry over unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalV1Mapper;

impl FormatMapper for CanonicalV1Mapper {
    fn target(&self) -> TargetFormat {
        TargetFormat::CanonicalFormV1
    }

    fn map(&self, message: &CanonicalFormMessage) -> Value {
        // Serializing the model cannot fail; a null document would be
        // rejected by the output schema, failing closed.
        serde_json::to_value(message).unwrap_or(Value::Null)
    }
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Read-only registry resolving target formats to their mappers.
pub struct MapperRegistry {
    /// Registered mappers keyed by target format.
    mappers: BTreeMap<TargetFormat, Box<dyn FormatMapper>>,
}

impl MapperRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mappers: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every built-in mapper.
    #[must_use]
    pub fn with_builtin_mappers() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CanonicalV1Mapper));
        registry
    }

    /// Registers a mapper under its declared target format, replacing any
    /// previous registration for that format.
    pub fn register(&mut self, mapper: Box<dyn FormatMapper>) {
        self.mappers.insert(mapper.target(), mapper);
    }

    /// Resolves the mapper for a target format.
    #[must_use]
    pub fn resolve(&self, format: TargetFormat) -> Option<&dyn FormatMapper> {
        self.mappers.get(&format).map(Box::as_ref)
    }

    /// Returns the formats with a registered mapper, in order.
    #[must_use]
    pub fn formats(&self) -> Vec<TargetFormat> {
        self.mappers.keys().copied().collect()
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::with_builtin_mappers()
    }
}
