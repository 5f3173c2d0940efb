// formcast-core/src/runtime/data_schema.rs
// ============================================================================
// Module: Data-Schema Builder
// Description: Derives the data-validation schema from canonical fields.
// Purpose: Produce artifact A of a render: types, titles, bounds, required
//          keys, and read-only gating for the requesting role.
// Dependencies: serde_json, crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The data-schema builder walks the field map in declaration order and emits
//! one property node per field. It never fails: unknown type strings pass
//! through verbatim and unresolved label keys degrade to the raw key. The
//! per-format output schema downstream is the enforcement point for anything
//! this builder lets through.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::core::FieldDefinition;
use crate::core::RoleToken;
use crate::core::has_edit_permission;
use crate::interfaces::LabelResolver;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Schema dialect stamped on every generated data schema.
pub const DATA_SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds the data-validation schema for one render call.
///
/// The builder is a pure function of the message, the requesting role, and
/// the label resolver; identical inputs always produce identical output.
pub struct DataSchemaBuilder<'ctx> {
    /// Role whose edit grants gate `readOnly`.
    role: &'ctx RoleToken,
    /// Resolver for property titles.
    labels: &'ctx dyn LabelResolver,
}

impl<'ctx> DataSchemaBuilder<'ctx> {
    /// Creates a builder for the given role and labels.
    #[must_use]
    pub const fn new(role: &'ctx RoleToken, labels: &'ctx dyn LabelResolver) -> Self {
        Self {
            role,
            labels,
        }
    }

    /// Builds the data schema for one field map.
    ///
    /// Output property order mirrors the input field order at every nesting
    /// level.
    #[must_use]
    pub fn build(&self, fields: &IndexMap<String, FieldDefinition>) -> Value {
        let (properties, required) = self.build_properties(fields);
        let mut schema = Map::new();
        schema.insert("$schema".into(), json!(DATA_SCHEMA_DIALECT));
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        schema.insert("required".into(), json!(required));
        Value::Object(schema)
    }

    /// Builds the `properties` map and `required` list for one field map.
    fn build_properties(
        &self,
        fields: &IndexMap<String, FieldDefinition>,
    ) -> (Map<String, Value>, Vec<String>) {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (key, field) in fields {
            if field.is_required() {
                required.push(key.clone());
            }
            properties.insert(key.clone(), self.build_property(field));
        }
        (properties, required)
    }

    /// Builds one property node.
    ///
    /// Key order is fixed: `type`, `title`, `minimum`, `maximum`, `readOnly`,
    /// `items`. `readOnly` is emitted only when the role may not edit the
    /// field; `required` never appears on the property itself.
    fn build_property(&self, field: &FieldDefinition) -> Value {
        let mut property = Map::new();
        property.insert("type".into(), json!(field.type_name()));
        property.insert("title".into(), json!(self.labels.resolve(field.label_key())));
        if let Some(rules) = field.validation() {
            if let Some(minimum) = rules.minimum {
                property.insert("minimum".into(), json!(minimum));
            }
            if let Some(maximum) = rules.maximum {
                property.insert("maximum".into(), json!(maximum));
            }
        }
        if !has_edit_permission(field.permissions(), self.role) {
            property.insert("readOnly".into(), json!(true));
        }
        if let FieldDefinition::Array(array) = field {
            let (nested, nested_required) = self.build_properties(&array.items.fields);
            let mut items = Map::new();
            items.insert("type".into(), json!("object"));
            items.insert("properties".into(), Value::Object(nested));
            items.insert("required".into(), json!(nested_required));
            property.insert("items".into(), Value::Object(items));
        }
        Value::Object(property)
    }
}
