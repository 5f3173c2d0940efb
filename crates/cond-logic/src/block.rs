// cond-logic/src/block.rs
// ============================================================================
// Module: Condition Blocks
// Description: Recursive AND/OR condition trees with leaf conditions.
// Purpose: Define the passthrough rule-block value types and their helpers.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`RuleBlock`] joins a list of leaf [`Condition`]s and a list of nested
//! child blocks under a single logical operator. Blocks are carried verbatim
//! from input to output: nesting depth is unbounded and an empty block is a
//! legal degenerate value that must round-trip unchanged. Because depth is
//! caller-controlled, the traversal helpers here are iterative rather than
//! recursive so adversarial nesting cannot exhaust the stack.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Operators
// ============================================================================

/// Logical operator joining all conditions and child blocks of a rule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    /// Every condition and child block must hold.
    And,
    /// At least one condition or child block must hold.
    Or,
}

/// Comparison operator applied by a leaf condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionOperator {
    /// Field value equals the expected value.
    Equals,
    /// Field value differs from the expected value.
    NotEquals,
    /// Field value is strictly greater than the expected value.
    GreaterThan,
    /// Field value is greater than or equal to the expected value.
    GreaterThanOrEqual,
    /// Field value is strictly less than the expected value.
    LessThan,
    /// Field value is less than or equal to the expected value.
    LessThanOrEqual,
    /// Field value is a member of the expected array.
    In,
    /// Field value is not a member of the expected array.
    NotIn,
    /// Field value contains the expected value.
    Contains,
}

// ============================================================================
// SECTION: Conditions
// ============================================================================

/// Leaf condition comparing a named field against an expected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Key of the field the condition inspects.
    pub field: String,
    /// Comparison operator.
    pub operator: ConditionOperator,
    /// Expected value; any JSON scalar, array, or object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Condition {
    /// Creates a condition over the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: ConditionOperator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value: Some(value),
        }
    }
}

// ============================================================================
// SECTION: Rule Blocks
// ============================================================================

/// Recursive block joining conditions and nested child blocks.
///
/// # Invariants
/// - Blocks are carried without interpretation; this crate never evaluates
///   them against form data.
/// - An empty block (no conditions, no child blocks) is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBlock {
    /// Logical operator joining everything in this block.
    pub operator: LogicalOperator,
    /// Leaf conditions of this block.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    /// Nested child blocks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Self>,
}

impl RuleBlock {
    /// Creates an AND block over the given conditions.
    #[must_use]
    pub const fn all(conditions: Vec<Condition>) -> Self {
        Self {
            operator: LogicalOperator::And,
            conditions,
            rules: Vec::new(),
        }
    }

    /// Creates an OR block over the given conditions.
    #[must_use]
    pub const fn any(conditions: Vec<Condition>) -> Self {
        Self {
            operator: LogicalOperator::Or,
            conditions,
            rules: Vec::new(),
        }
    }

    /// Returns a copy of this block with the given child block appended.
    #[must_use]
    pub fn with_rule(mut self, rule: Self) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns true when the block has neither conditions nor child blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.rules.is_empty()
    }

    /// Returns the maximum nesting depth of this block.
    ///
    /// A block with no child blocks has depth 1. The traversal uses an
    /// explicit worklist so unbounded input nesting cannot overflow the call
    /// stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max_depth = 1;
        let mut worklist: Vec<(&Self, usize)> = vec![(self, 1)];
        while let Some((block, level)) = worklist.pop() {
            max_depth = max_depth.max(level);
            for child in &block.rules {
                worklist.push((child, level + 1));
            }
        }
        max_depth
    }

    /// Returns the total number of leaf conditions across the whole tree.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        let mut count = 0;
        let mut worklist: Vec<&Self> = vec![self];
        while let Some(block) = worklist.pop() {
            count += block.conditions.len();
            worklist.extend(block.rules.iter());
        }
        count
    }
}
