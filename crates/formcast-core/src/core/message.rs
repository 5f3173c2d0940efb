// formcast-core/src/core/message.rs
// ============================================================================
// Module: Canonical Form Message
// Description: Immutable value types for the canonical form tree and fields.
// Purpose: Define the role-agnostic input model consumed by the pipeline.
// Dependencies: cond-logic, indexmap, serde, crate::core::{identifiers,
//              permissions, rules}
// ============================================================================

//! ## Overview
//! The canonical form message is the "common object" upstream services build
//! and hand to the renderer: a layout tree of groups, rows, and field
//! references plus an order-preserving map of field definitions. Values are
//! constructed once and passed through the pipeline without mutation. Wire
//! names are camelCase and layout variants are discriminated by a `"type"`
//! tag, so the model round-trips the canonical JSON exactly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::FormId;
use crate::core::identifiers::SchemaVersion;
use crate::core::permissions::Permission;
use crate::core::rules::ValidationRule;
use crate::core::rules::VisibilityRule;

// ============================================================================
// SECTION: Canonical Message
// ============================================================================

/// Default schema version stamped on newly built messages.
pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

/// Root canonical object representing a complete form definition.
///
/// # Invariants
/// - Field iteration order is preserved; output property order mirrors it.
/// - The message is never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalFormMessage {
    /// Message schema version; must match the semantic-version pattern.
    pub schema_version: SchemaVersion,
    /// Identifier of the form definition.
    pub form_id: FormId,
    /// Layout tree rendered into the UI layout schema.
    pub layout: Vec<LayoutElement>,
    /// Field definitions keyed by field key, in declaration order.
    pub fields: IndexMap<String, FieldDefinition>,
}

impl CanonicalFormMessage {
    /// Creates a message with an explicit schema version.
    #[must_use]
    pub fn new(
        schema_version: impl Into<SchemaVersion>,
        form_id: impl Into<FormId>,
        layout: Vec<LayoutElement>,
        fields: IndexMap<String, FieldDefinition>,
    ) -> Self {
        Self {
            schema_version: schema_version.into(),
            form_id: form_id.into(),
            layout,
            fields,
        }
    }

    /// Creates a message stamped with [`DEFAULT_SCHEMA_VERSION`].
    #[must_use]
    pub fn v1(
        form_id: impl Into<FormId>,
        layout: Vec<LayoutElement>,
        fields: IndexMap<String, FieldDefinition>,
    ) -> Self {
        Self::new(DEFAULT_SCHEMA_VERSION, form_id, layout, fields)
    }
}

// ============================================================================
// SECTION: Layout Elements
// ============================================================================

/// Layout tree node; discriminated on the wire by a `"type"` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum LayoutElement {
    /// Labelled group of nested elements.
    Group {
        /// Label key resolved to the group title.
        label_key: String,
        /// Nested elements, in render order; must be non-empty.
        elements: Vec<LayoutElement>,
        /// Conditional visibility rules, carried verbatim.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        visibility_rules: Vec<VisibilityRule>,
    },
    /// Horizontal grouping of elements.
    Row {
        /// Nested elements, in render order; must be non-empty.
        elements: Vec<LayoutElement>,
        /// Conditional visibility rules, carried verbatim.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        visibility_rules: Vec<VisibilityRule>,
    },
    /// Reference to a field definition by key; wire tag `"Field"`.
    #[serde(rename = "Field")]
    FieldRef {
        /// Key into the message's field map; must be non-blank.
        key: String,
        /// Conditional visibility rules, carried verbatim.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        visibility_rules: Vec<VisibilityRule>,
    },
}

impl LayoutElement {
    /// Creates a group with the given label key and children.
    #[must_use]
    pub fn group(label_key: impl Into<String>, elements: Vec<Self>) -> Self {
        Self::Group {
            label_key: label_key.into(),
            elements,
            visibility_rules: Vec::new(),
        }
    }

    /// Creates a row with the given children.
    #[must_use]
    pub const fn row(elements: Vec<Self>) -> Self {
        Self::Row {
            elements,
            visibility_rules: Vec::new(),
        }
    }

    /// Creates a field reference for the given key.
    #[must_use]
    pub fn field_ref(key: impl Into<String>) -> Self {
        Self::FieldRef {
            key: key.into(),
            visibility_rules: Vec::new(),
        }
    }

    /// Returns a copy of this element with the given visibility rules.
    #[must_use]
    pub fn with_visibility_rules(mut self, rules: Vec<VisibilityRule>) -> Self {
        match &mut self {
            Self::Group {
                visibility_rules, ..
            }
            | Self::Row {
                visibility_rules, ..
            }
            | Self::FieldRef {
                visibility_rules, ..
            } => *visibility_rules = rules,
        }
        self
    }

    /// Returns the visibility rules attached to this element.
    #[must_use]
    pub fn visibility_rules(&self) -> &[VisibilityRule] {
        match self {
            Self::Group {
                visibility_rules, ..
            }
            | Self::Row {
                visibility_rules, ..
            }
            | Self::FieldRef {
                visibility_rules, ..
            } => visibility_rules,
        }
    }
}

// ============================================================================
// SECTION: Field Definitions
// ============================================================================

/// Field definition; array fields are distinguished by their fixed
/// `"type": "array"` tag and required `items` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDefinition {
    /// Array/table field with nested item fields.
    Array(ArrayField),
    /// Scalar field such as a string, number, or boolean.
    Simple(SimpleField),
}

impl FieldDefinition {
    /// Returns the wire type name of the field.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Array(_) => "array",
            Self::Simple(field) => &field.field_type,
        }
    }

    /// Returns the label key of the field.
    #[must_use]
    pub fn label_key(&self) -> &str {
        match self {
            Self::Array(field) => &field.label_key,
            Self::Simple(field) => &field.label_key,
        }
    }

    /// Returns the widget hint of the field.
    #[must_use]
    pub fn widget(&self) -> &str {
        match self {
            Self::Array(field) => &field.widget,
            Self::Simple(field) => &field.widget,
        }
    }

    /// Returns the validation rules of the field when present.
    #[must_use]
    pub const fn validation(&self) -> Option<&ValidationRules> {
        match self {
            Self::Array(field) => field.validation.as_ref(),
            Self::Simple(field) => field.validation.as_ref(),
        }
    }

    /// Returns the permission grants of the field.
    #[must_use]
    pub fn permissions(&self) -> &[Permission] {
        match self {
            Self::Array(field) => &field.permissions,
            Self::Simple(field) => &field.permissions,
        }
    }

    /// Returns true when the field declares `validation.required == true`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.validation().and_then(|rules| rules.required) == Some(true)
    }
}

impl From<SimpleField> for FieldDefinition {
    fn from(field: SimpleField) -> Self {
        Self::Simple(field)
    }
}

impl From<ArrayField> for FieldDefinition {
    fn from(field: ArrayField) -> Self {
        Self::Array(field)
    }
}

/// Scalar field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleField {
    /// Data type copied verbatim into the data schema (`string`, `number`,
    /// `boolean`, ...). Unknown strings pass through; the per-format schema
    /// is the enforcement point.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Widget hint for the rendering layer.
    pub widget: String,
    /// Label key resolved to the property title.
    pub label_key: String,
    /// Optional key naming an externally provided option list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_key: Option<String>,
    /// Optional validation rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    /// Permission grants; empty means unconditionally editable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

impl SimpleField {
    /// Creates a scalar field with the required components.
    #[must_use]
    pub fn new(
        field_type: impl Into<String>,
        widget: impl Into<String>,
        label_key: impl Into<String>,
    ) -> Self {
        Self {
            field_type: field_type.into(),
            widget: widget.into(),
            label_key: label_key.into(),
            options_key: None,
            validation: None,
            permissions: Vec::new(),
        }
    }

    /// Returns a copy with the given options key.
    #[must_use]
    pub fn with_options_key(mut self, options_key: impl Into<String>) -> Self {
        self.options_key = Some(options_key.into());
        self
    }

    /// Returns a copy with the given validation rules.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Returns a copy with the given permission grants.
    #[must_use]
    pub fn with_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.permissions = permissions;
        self
    }
}

/// Fixed `"array"` type tag carried by array fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ArrayTypeTag {
    /// The only legal value.
    #[default]
    #[serde(rename = "array")]
    Array,
}

/// Array/table field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayField {
    /// Fixed type tag; always `"array"`.
    #[serde(rename = "type")]
    pub field_type: ArrayTypeTag,
    /// Widget hint for the rendering layer.
    pub widget: String,
    /// Label key resolved to the property title.
    pub label_key: String,
    /// Item definition for array rows; always present.
    pub items: ObjectItem,
    /// Optional validation rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    /// Permission grants; empty means unconditionally editable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

impl ArrayField {
    /// Creates an array field with the required components.
    #[must_use]
    pub fn new(
        widget: impl Into<String>,
        label_key: impl Into<String>,
        items: ObjectItem,
    ) -> Self {
        Self {
            field_type: ArrayTypeTag::Array,
            widget: widget.into(),
            label_key: label_key.into(),
            items,
            validation: None,
            permissions: Vec::new(),
        }
    }

    /// Returns a copy with the given validation rules.
    #[must_use]
    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Returns a copy with the given permission grants.
    #[must_use]
    pub fn with_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.permissions = permissions;
        self
    }
}

/// Fixed `"object"` type tag carried by array item definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ObjectTypeTag {
    /// The only legal value.
    #[default]
    #[serde(rename = "object")]
    Object,
}

/// Nested field map describing one array/table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectItem {
    /// Fixed type tag; always `"object"`.
    #[serde(rename = "type")]
    pub item_type: ObjectTypeTag,
    /// Row field definitions keyed by field key, in declaration order.
    pub fields: IndexMap<String, FieldDefinition>,
}

impl ObjectItem {
    /// Creates an item definition over the given row fields.
    #[must_use]
    pub fn new(fields: IndexMap<String, FieldDefinition>) -> Self {
        Self {
            item_type: ObjectTypeTag::Object,
            fields,
        }
    }
}

// ============================================================================
// SECTION: Validation Rules
// ============================================================================

/// Static validation rules attached to a field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Whether the field key joins the enclosing `required` array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Lower bound copied verbatim into the data schema; non-negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Upper bound copied verbatim into the data schema; non-negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    /// Conditional validation rules, carried verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<ValidationRule>,
}

impl ValidationRules {
    /// Returns rules that only mark the field required.
    #[must_use]
    pub const fn required() -> Self {
        Self {
            required: Some(true),
            minimum: None,
            maximum: None,
            rules: Vec::new(),
        }
    }

    /// Returns a copy with the given inclusive bounds.
    #[must_use]
    pub const fn with_bounds(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// Returns a copy with the given conditional rules.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<ValidationRule>) -> Self {
        self.rules = rules;
        self
    }
}
