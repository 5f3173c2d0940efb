// formcast-core/src/core/rules.rs
// ============================================================================
// Module: Conditional Rule Attachments
// Description: Form-specific rule wrappers around cond-logic blocks.
// Purpose: Define the passthrough validation and visibility rule types.
// Dependencies: cond-logic, serde
// ============================================================================

//! ## Overview
//! Validation and visibility rules pair a [`RuleBlock`] condition tree with a
//! form-specific action. The pipeline carries them verbatim from input to
//! output without interpretation; evaluating the trees against live form data
//! is a downstream renderer's responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use cond_logic::RuleBlock;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Validation Rules
// ============================================================================

/// Conditional validation rule attached to a field's `validation.rules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Condition tree gating the action.
    pub when: RuleBlock,
    /// Validation adjustments applied when the condition holds.
    pub then: ValidationAction,
}

/// Validation adjustments applied by a [`ValidationRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValidationAction {
    /// Overrides the field's required flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Overrides the field's minimum bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Overrides the field's maximum bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

impl ValidationAction {
    /// Returns an action that marks the field required.
    #[must_use]
    pub const fn require() -> Self {
        Self {
            required: Some(true),
            minimum: None,
            maximum: None,
        }
    }
}

// ============================================================================
// SECTION: Visibility Rules
// ============================================================================

/// Conditional visibility rule attached to a layout element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRule {
    /// Condition tree gating the action.
    pub when: RuleBlock,
    /// Visibility outcome applied when the condition holds.
    pub then: VisibilityAction,
}

impl VisibilityRule {
    /// Creates a rule showing the element when the condition holds.
    #[must_use]
    pub const fn show_when(when: RuleBlock) -> Self {
        Self {
            when,
            then: VisibilityAction {
                visible: true,
            },
        }
    }
}

/// Visibility outcome applied by a [`VisibilityRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityAction {
    /// Whether the element is visible when the condition holds.
    pub visible: bool,
}
