//! Browser form, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::page;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::index))
        .route("/video", get(page::index))
}
