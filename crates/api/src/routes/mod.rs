pub mod health;
pub mod labs;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /labs                                            create (any role)
/// /users                                           create (SystemAdmin)
/// /admin/users                                     create internal (SystemAdmin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/labs", labs::router())
        .nest("/users", users::router())
        .nest("/admin/users", users::admin_router())
}
