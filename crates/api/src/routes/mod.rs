pub mod health;
pub mod prompt;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /prompts                 list, create
/// /prompts/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/prompts", prompt::router())
}
