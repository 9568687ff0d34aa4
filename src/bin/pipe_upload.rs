use dotenvy::dotenv;
use std::io::BufReader;
use toolhub_client::config::ClientConfig;
use toolhub_client::pickers::{FilePicker, PathPicker};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pipe front end for the shared upload workflow: reads one image path per
/// line from stdin, uploads them all in one request, saves the archive.
///
/// Usage: ls *.png | cargo run --bin toolhub-pipe
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolhub_client=info,toolhub_pipe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🔌 Reading image paths from stdin, one per line...");

    let picker = PathPicker::from_reader(BufReader::new(std::io::stdin()))?;
    let selection = picker.pick().await?;

    let config = ClientConfig::from_env();
    info!(
        "🚀 Uploading {} file(s) to {}",
        selection.len(),
        config.base_url
    );

    let workflow = toolhub_client::create_workflow(&config);
    let report = workflow.run(selection).await?;

    info!(
        "🎉 Done: archive at {} ({} bytes)",
        report.path.display(),
        report.archive_bytes
    );

    Ok(())
}
