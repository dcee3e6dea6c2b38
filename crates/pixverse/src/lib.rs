//! Pixverse text-to-video client.
//!
//! Provides the REST wrapper ([`api::PixverseApi`]) and its
//! [`vidgen_core::services::VideoService`] implementation.

pub mod api;
pub mod service;

pub use api::{PixverseApi, PixverseApiError, VideoParams};
