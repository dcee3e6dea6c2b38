//! CLI for vidgen - submit a prompt to a running server and wait for the video.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidgen_cli::client::{GenerateClient, DEFAULT_SERVER_URL};
use vidgen_cli::session::run_generation;
use vidgen_core::form::{FormPhase, FormView, SubmissionForm};

#[derive(Parser)]
#[command(name = "vidgen")]
#[command(about = "Turn a text prompt into a short AI-generated video")]
#[command(version)]
struct Cli {
    /// The text prompt describing the video
    prompt: String,

    /// Base URL of the vidgen server
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidgen_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = GenerateClient::new(cli.server);

    let mut form = SubmissionForm::new();
    form.set_input(cli.prompt);

    let json_output = cli.json;
    run_generation(&client, &mut form, |form| {
        if !json_output {
            if let FormView::Loading { label } = form.view() {
                eprintln!("{label}");
            }
        }
    })
    .await?;

    match form.phase() {
        FormPhase::Done {
            video_url,
            enhanced_prompt,
        } => {
            if json_output {
                let result = serde_json::json!({
                    "success": true,
                    "video_url": video_url,
                    "enhanced_prompt": enhanced_prompt,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                if let Some(enhanced) = enhanced_prompt {
                    println!("Enhanced prompt: {enhanced}");
                }
                println!("Video: {video_url}");
            }
            Ok(())
        }
        FormPhase::Error { message } => {
            if json_output {
                let result = serde_json::json!({
                    "success": false,
                    "error": message,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
                std::process::exit(1);
            }
            anyhow::bail!("{message}")
        }
        other => anyhow::bail!("Generation ended in unexpected state: {other}"),
    }
}
