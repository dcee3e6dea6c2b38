//! Drives a [`SubmissionForm`] through one generation against the server.

use vidgen_core::error::CoreError;
use vidgen_core::form::SubmissionForm;

use crate::client::GenerateClient;

/// Submit the form's current input and wait for the outcome.
///
/// `on_change` is called after every phase transition. A prompt that fails
/// validation is returned as an error before any request is sent; a failed
/// generation is not an error here and leaves the form in its error phase.
pub async fn run_generation(
    client: &GenerateClient,
    form: &mut SubmissionForm,
    mut on_change: impl FnMut(&SubmissionForm),
) -> Result<(), CoreError> {
    let request = form.submit()?;
    on_change(form);

    form.begin_generating()?;
    on_change(form);

    match client.generate(request.prompt()).await {
        Ok(generated) => {
            tracing::info!(url = %generated.video_url, "Video generated");
            form.complete(generated.video_url, generated.enhanced_prompt)?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "Generation failed");
            form.fail(err.display_message())?;
        }
    }
    on_change(form);

    Ok(())
}
