use labtrack_core::audit::actions;
use labtrack_core::error::CoreError;
use labtrack_core::roles::Role;
use labtrack_core::user::{InternalUserRecord, UserRecord};

use super::Attempt;
use crate::auth::{self, Caller};
use crate::context::{HasRequestContext, RequestContext};
use crate::state::AppState;

/// Object name recorded in audit entries for both user shapes.
pub const USER_OBJECT: &str = "user";

/// Roles allowed to submit user records.
const USER_ADMINS: &[Role] = &[Role::SystemAdmin];

pub struct UserController {
    state: AppState,
    context: RequestContext,
}

impl UserController {
    /// A controller with an empty request context.
    pub fn new(state: AppState) -> Self {
        Self::with_context(state, RequestContext::default())
    }

    pub fn with_context(state: AppState, context: RequestContext) -> Self {
        Self { state, context }
    }

    pub fn caller(&self) -> Result<Caller, CoreError> {
        auth::authenticate(&self.context, &self.state.config.jwt)
    }

    /// Accept a public user record. `SystemAdmin` only.
    pub fn create(&self, record: UserRecord) -> Result<UserRecord, CoreError> {
        let caller = self.caller()?;
        let attempt =
            Attempt::new(&self.state, caller, actions::CREATE_USER, USER_OBJECT, record.id);

        attempt.authorize(USER_ADMINS)?;
        attempt.validated(record.validate_record())?;
        attempt.succeed();

        tracing::info!(target_user = ?record.id, role = ?record.role, "User record accepted");
        Ok(record)
    }

    /// Accept an internal user record. `SystemAdmin` only.
    pub fn create_internal(
        &self,
        record: InternalUserRecord,
    ) -> Result<InternalUserRecord, CoreError> {
        let caller = self.caller()?;
        let attempt = Attempt::new(
            &self.state,
            caller,
            actions::CREATE_INTERNAL_USER,
            USER_OBJECT,
            record.id,
        );

        attempt.authorize(USER_ADMINS)?;
        attempt.validated(record.validate_record())?;
        attempt.succeed();

        tracing::info!(
            target_user = ?record.id,
            active = record.active,
            "Internal user record accepted"
        );
        Ok(record)
    }
}

impl HasRequestContext for UserController {
    fn request_context(&self) -> &RequestContext {
        &self.context
    }

    fn request_context_mut(&mut self) -> &mut RequestContext {
        &mut self.context
    }
}
