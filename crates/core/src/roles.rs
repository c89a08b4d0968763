//! Well-known user roles.
//!
//! Role names travel as plain strings on the wire and are checked against
//! [`ROLE_PATTERN`]. The names are case-sensitive.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::{FieldIssue, ValidationReport};

pub const ROLE_CLERK: &str = "Clerk";
pub const ROLE_TECHNICIAN: &str = "Technician";
pub const ROLE_STUDENT: &str = "Student";
pub const ROLE_ACADEMIC_STAFF: &str = "AcademicStaff";
pub const ROLE_SYSTEM_ADMIN: &str = "SystemAdmin";

/// Anchored alternation of every role name.
pub const ROLE_PATTERN_SOURCE: &str = "^(Clerk|Technician|Student|AcademicStaff|SystemAdmin)$";

/// Compiled role pattern, shared by the DTO `regex` rules.
pub static ROLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ROLE_PATTERN_SOURCE).expect("valid regex"));

/// Message attached to role pattern failures.
pub const ROLE_MESSAGE: &str =
    "role must be one of: Clerk, Technician, Student, AcademicStaff, SystemAdmin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Clerk,
    Technician,
    Student,
    AcademicStaff,
    SystemAdmin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Clerk,
        Role::Technician,
        Role::Student,
        Role::AcademicStaff,
        Role::SystemAdmin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Clerk => ROLE_CLERK,
            Role::Technician => ROLE_TECHNICIAN,
            Role::Student => ROLE_STUDENT,
            Role::AcademicStaff => ROLE_ACADEMIC_STAFF,
            Role::SystemAdmin => ROLE_SYSTEM_ADMIN,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Validate a role name on its own, outside of any DTO.
///
/// Returns a `CoreError::Validation` with a single `role` issue on failure.
pub fn validate_role(value: &str) -> Result<Role, CoreError> {
    value.parse().map_err(|_: UnknownRole| {
        CoreError::Validation(ValidationReport::from_issues(vec![FieldIssue::new(
            "role",
            "regex",
            ROLE_MESSAGE,
        )]))
    })
}
