use crate::error::WorkflowError;
use crate::models::ProcessedArchive;
use crate::services::packager::UploadPayload;
use tracing::{debug, info};

/// Issues the single outbound POST of one upload action.
///
/// One call, one request: no retry, no backoff, no timeout beyond the
/// client defaults. An empty payload is still sent.
pub struct TransferClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransferClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/process", self.base_url)
    }

    /// Sends the payload and returns the raw binary response body.
    ///
    /// A request that never completes maps to `Transport`; a completed
    /// request with a non-2xx status maps to `Server` with that status.
    pub async fn process(&self, payload: &UploadPayload) -> Result<ProcessedArchive, WorkflowError> {
        let url = self.endpoint();
        debug!("📡 POST {} with {} part(s)", url, payload.len());

        let response = self
            .http
            .post(&url)
            .multipart(payload.to_form())
            .send()
            .await
            .map_err(WorkflowError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WorkflowError::Server { status });
        }

        let body = response.bytes().await.map_err(WorkflowError::Transport)?;
        info!("📥 Received {} byte archive", body.len());
        Ok(ProcessedArchive::new(body))
    }
}
