//! Domain layer for the vidgen service.
//!
//! Pure types, constants and state machines shared by the HTTP clients, the
//! generation pipeline, the API server and the CLI. Nothing here performs I/O.

pub mod error;
pub mod form;
pub mod generation;
pub mod services;
