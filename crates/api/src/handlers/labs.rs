use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use labtrack_core::lab::LabRecord;

use crate::context::RequestContext;
use crate::controllers::lab::LabController;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /labs
///
/// Validate and accept a lab record. Any authenticated role.
pub async fn create_lab(
    State(state): State<AppState>,
    context: RequestContext,
    payload: Result<Json<LabRecord>, JsonRejection>,
) -> AppResult<(StatusCode, Json<DataResponse<LabRecord>>)> {
    let Json(record) = payload?;
    let lab = LabController::with_context(state, context).create(record)?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: lab })))
}
