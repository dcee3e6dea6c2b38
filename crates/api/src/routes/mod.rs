pub mod health;
pub mod page;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /video                                           generate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(video::router())
}
