//! Route definitions for video generation.
//!
//! Mounted at `/api`.
//!
//! ```text
//! POST /video                                          generate_video
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/video", post(video::generate_video))
}
