//! Terminal front-end for a running vidgen server.
//!
//! [`client::GenerateClient`] speaks the HTTP endpoint;
//! [`session::run_generation`] walks a [`vidgen_core::form::SubmissionForm`]
//! through one request so the terminal shows the same phases as the
//! browser page.

pub mod client;
pub mod session;

pub use client::{ClientError, GenerateClient, Generated};
pub use session::run_generation;
