use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labtrack_core::user::{InternalUserRecord, UserRecord};

use crate::context::RequestContext;
use crate::controllers::user::UserController;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /users
///
/// Validate and accept a public user record. `SystemAdmin` only.
pub async fn create_user(
    State(state): State<AppState>,
    context: RequestContext,
    payload: Result<Json<UserRecord>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<UserRecord>>)> {
    let Json(record) = payload?;
    let user = UserController::with_context(state, context).create(record)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}

/// POST /admin/users
///
/// Validate and accept an internal user record. `SystemAdmin` only.
pub async fn create_internal_user(
    State(state): State<AppState>,
    context: RequestContext,
    payload: Result<Json<InternalUserRecord>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<InternalUserRecord>>)> {
    let Json(record) = payload?;
    let user = UserController::with_context(state, context).create_internal(record)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
}
