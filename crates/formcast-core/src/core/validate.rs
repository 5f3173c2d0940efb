// formcast-core/src/core/validate.rs
// ============================================================================
// Module: Structural Validation
// Description: Structural constraint checks over canonical form messages.
// Purpose: Reject malformed messages before rendering, reporting every
//          violation in a single pass.
// Dependencies: regex, serde, crate::core::{message, rules}
// ============================================================================

//! ## Overview
//! Structural validation runs before any artifact is built. It walks the
//! whole message and collects every violation instead of stopping at the
//! first, so callers can surface a complete error report. Each violation
//! carries a machine-readable code, a human message, and a dotted path into
//! the canonical message (for example
//! `fields[sofCountries].items.fields[country].widget`).
//!
//! An empty layout is deliberately not a structural violation; the per-format
//! output schema is the enforcement point for layout presence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use cond_logic::RuleBlock;

use crate::core::message::CanonicalFormMessage;
use crate::core::message::FieldDefinition;
use crate::core::message::LayoutElement;
use crate::core::message::ValidationRules;
use crate::core::rules::VisibilityRule;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum nesting depth accepted for a conditional rule tree.
pub const MAX_RULE_DEPTH: usize = 32;

/// Semantic-version pattern required of `schemaVersion`.
#[allow(
    clippy::expect_used,
    reason = "Pattern is a compile-time literal; failure is a programming error."
)]
static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("semantic-version pattern compiles")
});

// ============================================================================
// SECTION: Violation Type
// ============================================================================

/// Single structural constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Machine-readable violation code (`not_blank`, `pattern`, ...).
    pub code: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// Dotted path to the offending location in the canonical message.
    pub path: String,
}

impl ConstraintViolation {
    /// Creates a violation from its components.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.code)
    }
}

// ============================================================================
// SECTION: Message Validation
// ============================================================================

impl CanonicalFormMessage {
    /// Collects every structural violation in this message.
    ///
    /// Convenience wrapper over [`validate_message`].
    #[must_use]
    pub fn validate(&self) -> Vec<ConstraintViolation> {
        validate_message(self)
    }
}

/// Validates a canonical form message, returning every violation found.
///
/// An empty result means the message is structurally sound. The walk is
/// iterative throughout, so deeply nested layouts and rule trees cannot
/// overflow the stack.
#[must_use]
pub fn validate_message(message: &CanonicalFormMessage) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();

    if message.schema_version.as_str().trim().is_empty() {
        violations.push(ConstraintViolation::new(
            "not_blank",
            "schema version must not be blank",
            "schemaVersion",
        ));
    } else if !SEMVER_PATTERN.is_match(message.schema_version.as_str()) {
        violations.push(ConstraintViolation::new(
            "pattern",
            "schema version must be a semantic version",
            "schemaVersion",
        ));
    }

    if message.form_id.as_str().trim().is_empty() {
        violations.push(ConstraintViolation::new(
            "not_blank",
            "form id must not be blank",
            "formId",
        ));
    }

    validate_layout(&message.layout, &mut violations);
    validate_fields(message, &mut violations);

    violations
}

/// Walks the layout tree, checking each element's structural constraints.
fn validate_layout(layout: &[LayoutElement], violations: &mut Vec<ConstraintViolation>) {
    let mut stack: Vec<(String, &LayoutElement)> = layout
        .iter()
        .enumerate()
        .rev()
        .map(|(index, element)| (format!("layout[{index}]"), element))
        .collect();

    while let Some((path, element)) = stack.pop() {
        match element {
            LayoutElement::Group {
                label_key,
                elements,
                visibility_rules,
            } => {
                if label_key.trim().is_empty() {
                    violations.push(ConstraintViolation::new(
                        "not_blank",
                        "group label key must not be blank",
                        format!("{path}.labelKey"),
                    ));
                }
                if elements.is_empty() {
                    violations.push(ConstraintViolation::new(
                        "not_empty",
                        "group must contain at least one element",
                        format!("{path}.elements"),
                    ));
                }
                validate_visibility_rules(visibility_rules, &path, violations);
                push_children(&mut stack, &path, elements);
            }
            LayoutElement::Row {
                elements,
                visibility_rules,
            } => {
                if elements.is_empty() {
                    violations.push(ConstraintViolation::new(
                        "not_empty",
                        "row must contain at least one element",
                        format!("{path}.elements"),
                    ));
                }
                validate_visibility_rules(visibility_rules, &path, violations);
                push_children(&mut stack, &path, elements);
            }
            LayoutElement::FieldRef {
                key,
                visibility_rules,
            } => {
                if key.trim().is_empty() {
                    violations.push(ConstraintViolation::new(
                        "not_blank",
                        "field reference key must not be blank",
                        format!("{path}.key"),
                    ));
                }
                validate_visibility_rules(visibility_rules, &path, violations);
            }
        }
    }
}

/// Pushes child elements onto the layout worklist in reverse order so they
/// are visited in declaration order.
fn push_children<'msg>(
    stack: &mut Vec<(String, &'msg LayoutElement)>,
    path: &str,
    elements: &'msg [LayoutElement],
) {
    for (index, element) in elements.iter().enumerate().rev() {
        stack.push((format!("{path}.elements[{index}]"), element));
    }
}

/// Walks the field map, including nested array item fields.
fn validate_fields(message: &CanonicalFormMessage, violations: &mut Vec<ConstraintViolation>) {
    let mut stack: Vec<(String, &str, &FieldDefinition)> = message
        .fields
        .iter()
        .rev()
        .map(|(key, field)| (format!("fields[{key}]"), key.as_str(), field))
        .collect();

    while let Some((path, key, field)) = stack.pop() {
        if key.trim().is_empty() {
            violations.push(ConstraintViolation::new(
                "not_blank",
                "field key must not be blank",
                path.clone(),
            ));
        }
        if field.widget().trim().is_empty() {
            violations.push(ConstraintViolation::new(
                "not_blank",
                "field widget must not be blank",
                format!("{path}.widget"),
            ));
        }
        if field.label_key().trim().is_empty() {
            violations.push(ConstraintViolation::new(
                "not_blank",
                "field label key must not be blank",
                format!("{path}.labelKey"),
            ));
        }
        match field {
            FieldDefinition::Simple(simple) => {
                if simple.field_type.trim().is_empty() {
                    violations.push(ConstraintViolation::new(
                        "not_blank",
                        "field type must not be blank",
                        format!("{path}.type"),
                    ));
                } else if simple.field_type == "array" {
                    violations.push(ConstraintViolation::new(
                        "array_items",
                        "array field must declare an items definition",
                        format!("{path}.items"),
                    ));
                }
            }
            FieldDefinition::Array(array) => {
                for (child_key, child) in array.items.fields.iter().rev() {
                    stack.push((
                        format!("{path}.items.fields[{child_key}]"),
                        child_key.as_str(),
                        child,
                    ));
                }
            }
        }
        if let Some(rules) = field.validation() {
            validate_rules(rules, &path, violations);
        }
    }
}

/// Checks a field's static bounds and conditional rule trees.
fn validate_rules(
    rules: &ValidationRules,
    path: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    if let Some(minimum) = rules.minimum
        && minimum < 0
    {
        violations.push(ConstraintViolation::new(
            "negative_bound",
            "minimum must not be negative",
            format!("{path}.validation.minimum"),
        ));
    }
    if let Some(maximum) = rules.maximum
        && maximum < 0
    {
        violations.push(ConstraintViolation::new(
            "negative_bound",
            "maximum must not be negative",
            format!("{path}.validation.maximum"),
        ));
    }
    if let (Some(minimum), Some(maximum)) = (rules.minimum, rules.maximum)
        && minimum > maximum
    {
        violations.push(ConstraintViolation::new(
            "bound_order",
            "minimum must not exceed maximum",
            format!("{path}.validation"),
        ));
    }
    for (index, rule) in rules.rules.iter().enumerate() {
        check_rule_depth(
            &rule.when,
            &format!("{path}.validation.rules[{index}].when"),
            violations,
        );
    }
}

/// Checks the rule trees attached to one layout element.
fn validate_visibility_rules(
    rules: &[VisibilityRule],
    path: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    for (index, rule) in rules.iter().enumerate() {
        check_rule_depth(
            &rule.when,
            &format!("{path}.visibilityRules[{index}].when"),
            violations,
        );
    }
}

/// Flags condition trees nested deeper than [`MAX_RULE_DEPTH`].
fn check_rule_depth(block: &RuleBlock, path: &str, violations: &mut Vec<ConstraintViolation>) {
    if block.depth() > MAX_RULE_DEPTH {
        violations.push(ConstraintViolation::new(
            "rule_depth",
            format!("rule tree exceeds the maximum depth of {MAX_RULE_DEPTH}"),
            path.to_string(),
        ));
    }
}
