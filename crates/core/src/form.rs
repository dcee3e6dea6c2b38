//! Submission form state machine.
//!
//! The form holds one text input and a single [`FormPhase`]. Every UI
//! (browser page, CLI) renders from [`SubmissionForm::view`], which yields
//! exactly one panel, so the loading indicator and the result can never be
//! shown together.
//!
//! ```text
//! Idle | Done | Error --submit--> Enhancing --begin_generating--> Generating
//! Generating --complete--> Done
//! Enhancing | Generating --fail--> Error
//! ```

use std::fmt;

use crate::error::CoreError;
use crate::generation::GenerationRequest;

/// Shown before anything has been generated.
pub const EMPTY_LABEL: &str = "No Video Generated Yet.";
pub const ENHANCING_LABEL: &str = "Enhancing your prompt...";
pub const GENERATING_LABEL: &str = "Generating your video with Pixverse AI...";
/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR: &str = "Something went wrong.";
/// Example prompt used as input placeholder.
pub const PROMPT_PLACEHOLDER: &str = "Clown fish swimming around a coral reef";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Enhancing,
    Generating,
    Done {
        video_url: String,
        enhanced_prompt: Option<String>,
    },
    Error {
        message: String,
    },
}

impl FormPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Enhancing | FormPhase::Generating)
    }
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormPhase::Idle => "idle",
            FormPhase::Enhancing => "enhancing",
            FormPhase::Generating => "generating",
            FormPhase::Done { .. } => "done",
            FormPhase::Error { .. } => "error",
        };
        f.write_str(name)
    }
}

/// The single panel to render for the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView<'a> {
    Empty {
        label: &'static str,
    },
    Loading {
        label: &'static str,
    },
    Result {
        video_url: &'a str,
        enhanced_prompt: Option<&'a str>,
    },
    Failed {
        message: &'a str,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    input: String,
    phase: FormPhase,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Input and submit button are disabled while a generation runs.
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Validate the input and start a generation.
    ///
    /// On validation failure the phase is left untouched, so callers make no
    /// network call at all. Any previous result or error is discarded.
    pub fn submit(&mut self) -> Result<GenerationRequest, CoreError> {
        if self.is_busy() {
            return Err(CoreError::Busy);
        }
        let request = GenerationRequest::new(self.input.clone())?;
        self.phase = FormPhase::Enhancing;
        Ok(request)
    }

    pub fn begin_generating(&mut self) -> Result<(), CoreError> {
        if self.phase != FormPhase::Enhancing {
            return Err(invalid_transition("begin generating", &self.phase));
        }
        self.phase = FormPhase::Generating;
        Ok(())
    }

    /// Record a finished generation and reset the input.
    ///
    /// An empty `enhanced_prompt` is treated as absent.
    pub fn complete(
        &mut self,
        video_url: impl Into<String>,
        enhanced_prompt: Option<String>,
    ) -> Result<(), CoreError> {
        if self.phase != FormPhase::Generating {
            return Err(invalid_transition("complete", &self.phase));
        }
        self.phase = FormPhase::Done {
            video_url: video_url.into(),
            enhanced_prompt: enhanced_prompt.filter(|p| !p.is_empty()),
        };
        self.input.clear();
        Ok(())
    }

    /// Record a failed generation. The input is kept so it can be retried.
    pub fn fail(&mut self, message: Option<String>) -> Result<(), CoreError> {
        if !self.is_busy() {
            return Err(invalid_transition("fail", &self.phase));
        }
        self.phase = FormPhase::Error {
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
        };
        Ok(())
    }

    pub fn view(&self) -> FormView<'_> {
        match &self.phase {
            FormPhase::Idle => FormView::Empty { label: EMPTY_LABEL },
            FormPhase::Enhancing => FormView::Loading {
                label: ENHANCING_LABEL,
            },
            FormPhase::Generating => FormView::Loading {
                label: GENERATING_LABEL,
            },
            FormPhase::Done {
                video_url,
                enhanced_prompt,
            } => FormView::Result {
                video_url,
                enhanced_prompt: enhanced_prompt.as_deref(),
            },
            FormPhase::Error { message } => FormView::Failed { message },
        }
    }
}

fn invalid_transition(event: &str, phase: &FormPhase) -> CoreError {
    CoreError::Internal(format!("cannot {event} while form is {phase}"))
}
