// formcast-core/src/core/permissions.rs
// ============================================================================
// Module: Permission Tokens
// Description: Parsed `ACTION:ROLE` permission grants and edit gating.
// Purpose: Replace the raw permission micro-language with structured values.
// Dependencies: serde, thiserror, crate::core::identifiers
// ============================================================================

//! ## Overview
//! Permission tokens arrive on the wire as `"ACTION:ROLE"` strings. They are
//! parsed into [`Permission`] values at the data-model boundary so malformed
//! entries fail fast instead of being silently treated as non-grants.
//! Matching against the requesting role is case-insensitive; the canonical
//! serialized form is uppercase (`"EDIT:ADMIN"`).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::RoleToken;

// ============================================================================
// SECTION: Permission Action
// ============================================================================

/// Action component of a permission token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionAction {
    /// Grants visibility of a field.
    View,
    /// Grants editability of a field.
    Edit,
}

impl PermissionAction {
    /// Returns the canonical uppercase label for the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "VIEW",
            Self::Edit => "EDIT",
        }
    }
}

// ============================================================================
// SECTION: Permission Token
// ============================================================================

/// Permission parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Token does not contain an `ACTION:ROLE` separator.
    #[error("permission token must have the form ACTION:ROLE, got: {0}")]
    Malformed(String),
    /// Action component is not `VIEW` or `EDIT`.
    #[error("permission action must be VIEW or EDIT, got: {0}")]
    UnknownAction(String),
    /// Role component is blank.
    #[error("permission role must not be blank in token: {0}")]
    BlankRole(String),
}

/// Structured permission grant parsed from an `"ACTION:ROLE"` token.
///
/// # Invariants
/// - The role component is stored uppercase and is never blank.
/// - Values only exist in parsed form; malformed tokens are rejected at
///   construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    /// Granted action.
    pub action: PermissionAction,
    /// Role the action is granted to, uppercase.
    pub role: String,
}

impl Permission {
    /// Creates an edit grant for the given role.
    #[must_use]
    pub fn edit(role: impl Into<String>) -> Self {
        Self {
            action: PermissionAction::Edit,
            role: role.into().to_ascii_uppercase(),
        }
    }

    /// Creates a view grant for the given role.
    #[must_use]
    pub fn view(role: impl Into<String>) -> Self {
        Self {
            action: PermissionAction::View,
            role: role.into().to_ascii_uppercase(),
        }
    }

    /// Returns true when this grant allows the given role to edit.
    #[must_use]
    pub fn grants_edit(&self, role: &RoleToken) -> bool {
        self.action == PermissionAction::Edit && self.role.eq_ignore_ascii_case(role.as_str())
    }
}

impl FromStr for Permission {
    type Err = PermissionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let Some((action, role)) = token.split_once(':') else {
            return Err(PermissionError::Malformed(token.to_string()));
        };
        let action = match action.to_ascii_uppercase().as_str() {
            "VIEW" => PermissionAction::View,
            "EDIT" => PermissionAction::Edit,
            _ => return Err(PermissionError::UnknownAction(action.to_string())),
        };
        if role.trim().is_empty() {
            return Err(PermissionError::BlankRole(token.to_string()));
        }
        Ok(Self {
            action,
            role: role.to_ascii_uppercase(),
        })
    }
}

impl TryFrom<String> for Permission {
    type Error = PermissionError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.action.as_str(), self.role)
    }
}

// ============================================================================
// SECTION: Edit Gating
// ============================================================================

/// Returns true when the role may edit a field with the given grants.
///
/// An absent or empty permission list means the field is unconditionally
/// editable. Otherwise the role must hold an `EDIT` grant, matched
/// case-insensitively. There is no separate `VIEW` enforcement: a field
/// lacking any grant for the role is still emitted, only its editability is
/// gated.
#[must_use]
pub fn has_edit_permission(permissions: &[Permission], role: &RoleToken) -> bool {
    if permissions.is_empty() {
        return true;
    }
    permissions.iter().any(|permission| permission.grants_edit(role))
}
