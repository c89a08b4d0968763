//! Controllers sit between the HTTP handlers and the core records.
//!
//! Each controller owns the [`AppState`] and a [`RequestContext`]. Every
//! operation follows the same sequence:
//!
//! 1. authenticate the caller (no audit entry on failure, there is no actor)
//! 2. authorize the caller's role (audited as `denied`)
//! 3. validate the record (audited as `rejected`)
//! 4. accept (audited as `success`)
//!
//! - [`lab::LabController`] -- lab registration.
//! - [`user::UserController`] -- public and internal user records.

pub mod lab;
pub mod user;

use labtrack_core::audit::{statuses, AuditEntry};
use labtrack_core::error::CoreError;
use labtrack_core::roles::Role;
use labtrack_core::types::DbId;

use crate::auth::Caller;
use crate::state::AppState;

/// One audited controller operation on behalf of an authenticated caller.
pub(crate) struct Attempt<'a> {
    state: &'a AppState,
    caller: Caller,
    action: &'static str,
    object_name: &'static str,
    object_id: DbId,
}

impl<'a> Attempt<'a> {
    pub(crate) fn new(
        state: &'a AppState,
        caller: Caller,
        action: &'static str,
        object_name: &'static str,
        object_id: Option<DbId>,
    ) -> Self {
        Self {
            state,
            caller,
            action,
            object_name,
            object_id: object_id.unwrap_or(0),
        }
    }

    /// Check the caller's role against `allowed`, auditing a denial.
    pub(crate) fn authorize(&self, allowed: &[Role]) -> Result<(), CoreError> {
        self.caller.require_any(allowed).inspect_err(|_| {
            tracing::warn!(
                user_id = self.caller.user_id,
                role = %self.caller.role,
                action = self.action,
                "Caller not permitted"
            );
            self.record(statuses::DENIED);
        })
    }

    /// Pass through a validation outcome, auditing a rejection.
    pub(crate) fn validated(&self, outcome: Result<(), CoreError>) -> Result<(), CoreError> {
        outcome.inspect_err(|err| {
            tracing::info!(action = self.action, error = %err, "Record rejected");
            self.record(statuses::REJECTED);
        })
    }

    /// Audit the successful completion of the operation.
    pub(crate) fn succeed(self) {
        self.record(statuses::SUCCESS);
    }

    fn record(&self, status: &str) {
        let entry = AuditEntry::new(
            self.caller.role.as_str(),
            self.caller.user_id,
            self.action,
            self.object_name,
            self.object_id,
            status,
        );
        self.state.audit.record(&entry);
    }
}
