//! Route definitions for the `/prompts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::prompt;
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompt::list).post(prompt::create))
        .route(
            "/{id}",
            get(prompt::get_by_id)
                .put(prompt::update)
                .delete(prompt::delete),
        )
}
