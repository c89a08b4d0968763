//! Audit entries: who did what to which object, and with what outcome.
//!
//! An [`AuditEntry`] is immutable once built. Every field is mandatory:
//! [`AuditEntry::new`] takes all six, and [`AuditEntryBuilder::build`] refuses
//! to produce an entry while any of them is missing.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{FieldIssue, ValidationReport};

// ---------------------------------------------------------------------------
// Well-known values
// ---------------------------------------------------------------------------

/// Action names recorded by the API.
pub mod actions {
    pub const CREATE_LAB: &str = "create_lab";
    pub const CREATE_USER: &str = "create_user";
    pub const CREATE_INTERNAL_USER: &str = "create_internal_user";
}

/// Outcome names.
pub mod statuses {
    pub const SUCCESS: &str = "success";
    /// The payload failed validation.
    pub const REJECTED: &str = "rejected";
    /// The caller lacked the required role.
    pub const DENIED: &str = "denied";
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    actor_role: String,
    actor_id: DbId,
    action: String,
    object_name: String,
    object_id: DbId,
    status: String,
}

impl AuditEntry {
    pub fn new(
        actor_role: impl Into<String>,
        actor_id: DbId,
        action: impl Into<String>,
        object_name: impl Into<String>,
        object_id: DbId,
        status: impl Into<String>,
    ) -> Self {
        Self {
            actor_role: actor_role.into(),
            actor_id,
            action: action.into(),
            object_name: object_name.into(),
            object_id,
            status: status.into(),
        }
    }

    pub fn builder() -> AuditEntryBuilder {
        AuditEntryBuilder::default()
    }

    pub fn actor_role(&self) -> &str {
        &self.actor_role
    }

    pub fn actor_id(&self) -> DbId {
        self.actor_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn object_id(&self) -> DbId {
        self.object_id
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Incremental construction of an [`AuditEntry`].
///
/// Blank strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct AuditEntryBuilder {
    actor_role: Option<String>,
    actor_id: Option<DbId>,
    action: Option<String>,
    object_name: Option<String>,
    object_id: Option<DbId>,
    status: Option<String>,
}

impl AuditEntryBuilder {
    pub fn actor_role(mut self, value: impl Into<String>) -> Self {
        self.actor_role = Some(value.into());
        self
    }

    pub fn actor_id(mut self, value: DbId) -> Self {
        self.actor_id = Some(value);
        self
    }

    pub fn action(mut self, value: impl Into<String>) -> Self {
        self.action = Some(value.into());
        self
    }

    pub fn object_name(mut self, value: impl Into<String>) -> Self {
        self.object_name = Some(value.into());
        self
    }

    pub fn object_id(mut self, value: DbId) -> Self {
        self.object_id = Some(value);
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    /// Produce the entry, or a `CoreError::Validation` naming every missing
    /// field.
    pub fn build(self) -> Result<AuditEntry, CoreError> {
        let mut issues = Vec::new();

        let actor_role = require_text("actor_role", self.actor_role, &mut issues);
        let actor_id = require("actor_id", self.actor_id, &mut issues);
        let action = require_text("action", self.action, &mut issues);
        let object_name = require_text("object_name", self.object_name, &mut issues);
        let object_id = require("object_id", self.object_id, &mut issues);
        let status = require_text("status", self.status, &mut issues);

        match (actor_role, actor_id, action, object_name, object_id, status) {
            (
                Some(actor_role),
                Some(actor_id),
                Some(action),
                Some(object_name),
                Some(object_id),
                Some(status),
            ) => Ok(AuditEntry {
                actor_role,
                actor_id,
                action,
                object_name,
                object_id,
                status,
            }),
            _ => Err(CoreError::Validation(ValidationReport::from_issues(issues))),
        }
    }
}

fn require<T>(field: &'static str, value: Option<T>, issues: &mut Vec<FieldIssue>) -> Option<T> {
    if value.is_none() {
        issues.push(FieldIssue::new(field, "required", format!("{field} is required")));
    }
    value
}

fn require_text(
    field: &'static str,
    value: Option<String>,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    require(field, value.filter(|v| !v.trim().is_empty()), issues)
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

/// Destination for completed audit entries.
pub trait AuditSink: Send + Sync {
    fn record(&self, entry: &AuditEntry);
}

/// Keeps every entry in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entries recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn record(&self, entry: &AuditEntry) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
