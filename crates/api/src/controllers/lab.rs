use labtrack_core::audit::actions;
use labtrack_core::error::CoreError;
use labtrack_core::lab::LabRecord;
use labtrack_core::roles::Role;

use super::Attempt;
use crate::auth::{self, Caller};
use crate::context::{HasRequestContext, RequestContext};
use crate::state::AppState;

/// Object name recorded in audit entries for labs.
pub const LAB_OBJECT: &str = "lab";

pub struct LabController {
    state: AppState,
    context: RequestContext,
}

impl LabController {
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

    /// Register a lab. Any authenticated role may do so.
    pub fn create(&self, record: LabRecord) -> Result<LabRecord, CoreError> {
        let caller = self.caller()?;
        let attempt = Attempt::new(&self.state, caller, actions::CREATE_LAB, LAB_OBJECT, record.id);

        attempt.authorize(&Role::ALL)?;
        attempt.validated(record.validate_record())?;
        attempt.succeed();

        tracing::info!(lab_id = ?record.id, user_id = caller.user_id, "Lab accepted");
        Ok(record)
    }
}

impl HasRequestContext for LabController {
    fn request_context(&self) -> &RequestContext {
        &self.context
    }

    fn request_context_mut(&mut self) -> &mut RequestContext {
        &mut self.context
    }
}
