// formcast-core/src/runtime/ui_layout.rs
// ============================================================================
// Module: UI-Layout Builder
// Description: Derives the UI layout schema from the canonical layout tree.
// Purpose: Produce artifact B of a render: Group, VerticalLayout,
//          HorizontalLayout, and Control nodes mirroring the input order.
// Dependencies: serde_json, crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The UI-layout builder renders the layout tree into the node vocabulary a
//! form renderer consumes. Two collapsing rules shape the output: a layout
//! whose single root element is a group becomes that group with no wrapper,
//! and a row with exactly one field reference becomes a bare control. Output
//! ordering mirrors input ordering at every level.
//!
//! Two historical quirks are preserved deliberately: a field reference
//! outside any row renders as an empty node, and non-reference children of a
//! multi-element row are dropped rather than rendered.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::core::LayoutElement;
use crate::interfaces::LabelResolver;

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builds the UI layout schema for one render call.
pub struct UiLayoutBuilder<'ctx> {
    /// Resolver for group labels.
    labels: &'ctx dyn LabelResolver,
}

impl<'ctx> UiLayoutBuilder<'ctx> {
    /// Creates a builder over the given labels.
    #[must_use]
    pub const fn new(labels: &'ctx dyn LabelResolver) -> Self {
        Self {
            labels,
        }
    }

    /// Builds the UI layout schema for one layout tree.
    ///
    /// A layout with exactly one root group collapses to that group's
    /// rendering; any other layout is wrapped in a vertical layout.
    #[must_use]
    pub fn build(&self, layout: &[LayoutElement]) -> Value {
        if let [root @ LayoutElement::Group { .. }] = layout {
            return self.render_element(root);
        }
        let elements: Vec<Value> = layout
            .iter()
            .map(|element| self.render_element(element))
            .collect();
        json!({
            "type": "VerticalLayout",
            "elements": elements,
        })
    }

    /// Renders one layout element outside row context.
    fn render_element(&self, element: &LayoutElement) -> Value {
        match element {
            LayoutElement::Group {
                label_key,
                elements,
                ..
            } => {
                let children: Vec<Value> = elements
                    .iter()
                    .map(|child| self.render_element(child))
                    .collect();
                json!({
                    "type": "Group",
                    "label": self.labels.resolve(label_key),
                    "elements": children,
                })
            }
            LayoutElement::Row {
                elements, ..
            } => self.render_row(elements),
            // A bare field reference has no row to place it; it renders as
            // an empty node.
            LayoutElement::FieldRef {
                ..
            } => Value::Object(Map::new()),
        }
    }

    /// Renders a row, applying the single-reference collapsing rule.
    fn render_row(&self, elements: &[LayoutElement]) -> Value {
        if let [LayoutElement::FieldRef {
            key, ..
        }] = elements
        {
            return Self::render_control(key);
        }
        let controls: Vec<Value> = elements
            .iter()
            .filter_map(|child| match child {
                LayoutElement::FieldRef {
                    key, ..
                } => Some(Self::render_control(key)),
                // Nested groups and rows inside a multi-element row are
                // dropped, not rendered.
                LayoutElement::Group { .. } | LayoutElement::Row { .. } => None,
            })
            .collect();
        json!({
            "type": "HorizontalLayout",
            "elements": controls,
        })
    }

    /// Renders a control bound to one field key.
    fn render_control(key: &str) -> Value {
        json!({
            "type": "Control",
            "scope": format!("#/properties/{key}"),
        })
    }
}
