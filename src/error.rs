use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can fail an upload workflow.
///
/// The three wire-facing kinds map one request outcome each: the request
/// never completed (`Transport`), it completed with a failure status
/// (`Server`), or the body could not be turned into a saved archive
/// (`Materialization`). None of them is retried.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Server returned status {status}")]
    Server { status: StatusCode },

    #[error("Could not materialize download: {0}")]
    Materialization(String),

    #[error("Could not read selected file {path}: {source}")]
    Selection {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An upload is already in flight")]
    Busy,
}
