//! Prompt-to-video generation workflow.
//!
//! Runs the three steps of a generation strictly in sequence:
//!
//! 1. [`enhance::enhance_prompt`] rewrites the prompt, falling back to the
//!    original text on any failure.
//! 2. The enhanced text is submitted to the video service.
//! 3. [`poll::poll_until_ready`] checks the job at a fixed interval until it
//!    is ready, fails, or the attempt budget runs out.
//!
//! [`workflow::GenerationPipeline`] ties the steps together.

pub mod enhance;
pub mod poll;
pub mod workflow;

pub use poll::PollConfig;
pub use workflow::GenerationPipeline;
