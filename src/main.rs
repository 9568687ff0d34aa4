use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use toolhub_client::config::ClientConfig;
use toolhub_client::pickers::{FilePicker, PathPicker};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Upload images to the Online Tool Hub backend and save the processed ZIP
#[derive(Parser, Debug)]
#[command(name = "toolhub", version, about)]
struct Cli {
    /// Image files to upload, in order
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Base URL of the image API
    #[arg(long, env = "TOOLHUB_BASE_URL")]
    base_url: Option<String>,

    /// Directory to save the processed archive into
    #[arg(long, env = "TOOLHUB_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolhub_client=info,toolhub=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    info!(
        "🚀 Uploading {} file(s) to {}",
        cli.images.len(),
        config.base_url
    );

    let picker = PathPicker::new(cli.images);
    let selection = picker.pick().await?;

    let workflow = toolhub_client::create_workflow(&config);
    let report = workflow.run(selection).await?;

    info!(
        "🎉 Done: {} file(s) processed, archive at {} ({} bytes)",
        report.files_sent,
        report.path.display(),
        report.archive_bytes
    );

    Ok(())
}
