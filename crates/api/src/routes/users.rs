use axum::routing::post;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Public user routes mounted at `/users`.
///
/// ```text
/// POST   /                  -> create_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(users::create_user))
}

/// Administrative user routes mounted at `/admin/users`.
///
/// ```text
/// POST   /                  -> create_internal_user
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", post(users::create_internal_user))
}
