use axum::routing::post;
use axum::Router;

use crate::handlers::labs;
use crate::state::AppState;

/// Lab routes mounted at `/labs`.
///
/// ```text
/// POST   /                  -> create_lab
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(labs::create_lab))
}
