// formcast-core/src/interfaces/mod.rs
// ============================================================================
// Module: Formcast Interfaces
// Description: Format-agnostic contract surfaces for labels and mapping.
// Purpose: Define the seams the rendering runtime is assembled from.
// Dependencies: serde, serde_json, crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how Formcast integrates with its callers without
//! embedding format-specific details. Implementations must be deterministic:
//! the same message, role, and labels always produce the same artifacts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::core::CanonicalFormMessage;

// ============================================================================
// SECTION: Target Format
// ============================================================================

/// Output format a rendering request targets.
///
/// Each format pairs a mapper with the bundled output schema its artifacts
/// are validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetFormat {
    /// Canonical form message, version 1.
    #[serde(rename = "canonical-form-v1")]
    CanonicalFormV1,
}

impl TargetFormat {
    /// Every format known to this crate.
    pub const ALL: &'static [Self] = &[Self::CanonicalFormV1];

    /// Returns the stable wire name of the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CanonicalFormV1 => "canonical-form-v1",
        }
    }

    /// Returns the file name of the bundled output schema for the format.
    #[must_use]
    pub const fn schema_name(self) -> &'static str {
        match self {
            Self::CanonicalFormV1 => "canonical-form-v1.0.0.schema.json",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Label Resolver
// ============================================================================

/// Resolves label keys to display strings.
///
/// Resolution is a plain lookup: a key with no known label falls back to the
/// key itself, so missing translations degrade visibly instead of failing the
/// render.
pub trait LabelResolver: Send + Sync {
    /// Returns the label for a key when one is known.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Resolves a key to its display string, falling back to the key.
    fn resolve<'key>(&'key self, key: &'key str) -> &'key str {
        self.lookup(key).unwrap_or(key)
    }
}

/// Label resolver backed by an in-memory map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapLabelResolver {
    /// Label strings keyed by label key.
    labels: BTreeMap<String, String>,
}

impl MapLabelResolver {
    /// Creates a resolver over the given labels.
    #[must_use]
    pub const fn new(labels: BTreeMap<String, String>) -> Self {
        Self {
            labels,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MapLabelResolver
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl LabelResolver for MapLabelResolver {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

/// Label resolver that knows no labels; every key resolves to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLabelResolver;

impl LabelResolver for NullLabelResolver {
    fn lookup(&self, _key: &str) -> Option<&str> {
        None
    }
}

// ============================================================================
// SECTION: Format Mapper
// ============================================================================

/// Maps a canonical form message to the output document of one format.
///
/// Mapping is infallible by contract: a mapper always produces a document,
/// and the per-format output schema decides afterwards whether that document
/// is acceptable.
pub trait FormatMapper: Send + Sync {
    /// Returns the format this mapper produces.
    fn target(&self) -> TargetFormat;

    /// Maps the message to the format's output document.
    fn map(&self, message: &CanonicalFormMessage) -> Value;
}
