// cond-logic/src/lib.rs
// ============================================================================
// Module: Condition Logic Root
// Description: Public API surface for the condition-tree subsystem.
// Purpose: Expose the recursive AND/OR rule-block value types.
// Dependencies: crate::block
// ============================================================================

//! ## Overview
//! Cond Logic provides the recursive boolean condition trees carried inside
//! form definitions. The trees are pure data: this crate defines their shape,
//! serialization, and structural helpers, and deliberately does not evaluate
//! them. Evaluation against live form data belongs to a downstream renderer.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod block;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use block::Condition;
pub use block::ConditionOperator;
pub use block::LogicalOperator;
pub use block::RuleBlock;
