pub mod config;
pub mod error;
pub mod models;
pub mod pickers;
pub mod services;

use crate::config::ClientConfig;
use crate::services::materializer::DownloadMaterializer;
use crate::services::transfer::TransferClient;
use crate::services::workflow::UploadWorkflow;

pub use crate::error::WorkflowError;
pub use crate::models::{FileSelection, ProcessedArchive, SelectedFile};
pub use crate::services::workflow::{DownloadReport, WorkflowPhase};

/// Wires the shared upload workflow from a config. Both front ends (the CLI
/// and the stdin pipe) consume the workflow built here.
pub fn create_workflow(config: &ClientConfig) -> UploadWorkflow {
    let client = TransferClient::new(config.base_url.clone());
    let materializer = DownloadMaterializer::new(
        config.output_dir.clone(),
        config.download_filename.clone(),
    );
    UploadWorkflow::new(client, materializer)
}
