//! User transfer records.
//!
//! Two distinct shapes exist: [`UserRecord`] is the public-facing profile,
//! [`InternalUserRecord`] is the administrative view with an activation flag.
//! They share the role rule but are otherwise independent types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::roles::{Role, ROLE_PATTERN};
use crate::types::DbId;
use crate::validation;

// ---------------------------------------------------------------------------
// Public user record
// ---------------------------------------------------------------------------

/// Public user profile as it crosses the API boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[validate(required(message = "id is required"))]
    pub id: Option<DbId>,

    /// Required, and additionally checked for address format; this is a
    /// stricter rule than the role pattern alone.
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address")
    )]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,

    // Message literal mirrors `roles::ROLE_MESSAGE`.
    #[validate(
        required(message = "role is required"),
        regex(
            path = *ROLE_PATTERN,
            message = "role must be one of: Clerk, Technician, Student, AcademicStaff, SystemAdmin"
        )
    )]
    pub role: Option<String>,
}

impl UserRecord {
    /// Run the declared rules, mapping failure to [`CoreError::Validation`].
    pub fn validate_record(&self) -> Result<(), CoreError> {
        validation::check(self).map_err(CoreError::from)
    }

    /// The parsed role, if present and one of the known names.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }
}

// ---------------------------------------------------------------------------
// Internal user record
// ---------------------------------------------------------------------------

fn default_active() -> bool {
    true
}

/// Administrative user view. Email is optional here; `active` defaults to
/// `true` when the payload omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InternalUserRecord {
    #[validate(required(message = "id is required"))]
    pub id: Option<DbId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,

    // Message literal mirrors `roles::ROLE_MESSAGE`.
    #[validate(
        required(message = "role is required"),
        regex(
            path = *ROLE_PATTERN,
            message = "role must be one of: Clerk, Technician, Student, AcademicStaff, SystemAdmin"
        )
    )]
    pub role: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

impl Default for InternalUserRecord {
    fn default() -> Self {
        Self {
            id: None,
            first_name: None,
            last_name: None,
            email: None,
            role: None,
            active: default_active(),
        }
    }
}

impl InternalUserRecord {
    /// Run the declared rules, mapping failure to [`CoreError::Validation`].
    pub fn validate_record(&self) -> Result<(), CoreError> {
        validation::check(self).map_err(CoreError::from)
    }

    /// The parsed role, if present and one of the known names.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|r| r.parse().ok())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
