use crate::error::WorkflowError;
use crate::models::FileSelection;
use crate::services::materializer::DownloadMaterializer;
use crate::services::packager::UploadPayload;
use crate::services::transfer::TransferClient;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use tracing::{debug, error, info};

/// Phase of one upload action. Terminal phases hand control straight back
/// to `Idle` without retaining payload or response data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WorkflowPhase {
    Idle = 0,
    Packaging = 1,
    Sending = 2,
    Succeeded = 3,
    Failed = 4,
}

impl WorkflowPhase {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => WorkflowPhase::Idle,
            1 => WorkflowPhase::Packaging,
            2 => WorkflowPhase::Sending,
            3 => WorkflowPhase::Succeeded,
            _ => WorkflowPhase::Failed,
        }
    }
}

/// Summary of one successful run.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub path: PathBuf,
    pub files_sent: usize,
    pub archive_bytes: usize,
}

/// The shared upload workflow: package, send, save. Strictly sequential,
/// one suspension point (the network call), no retry and no cancellation.
///
/// A second run started while a request is in flight is rejected with
/// [`WorkflowError::Busy`] rather than queued.
pub struct UploadWorkflow {
    client: TransferClient,
    materializer: DownloadMaterializer,
    in_flight: AtomicBool,
    phase: AtomicU8,
}

impl UploadWorkflow {
    pub fn new(client: TransferClient, materializer: DownloadMaterializer) -> Self {
        Self {
            client,
            materializer,
            in_flight: AtomicBool::new(false),
            phase: AtomicU8::new(WorkflowPhase::Idle as u8),
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        WorkflowPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    fn set_phase(&self, phase: WorkflowPhase) {
        debug!("🔄 Workflow phase: {:?}", phase);
        self.phase.store(phase as u8, Ordering::SeqCst);
    }

    /// Runs one upload action end to end and returns where the archive was
    /// saved. Each invocation owns its payload and response; nothing is
    /// shared between runs.
    pub async fn run(&self, selection: FileSelection) -> Result<DownloadReport, WorkflowError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(WorkflowError::Busy);
        }

        let result = self.run_inner(selection).await;

        match &result {
            Ok(report) => {
                self.set_phase(WorkflowPhase::Succeeded);
                info!(
                    "✅ Processed {} file(s) into {}",
                    report.files_sent,
                    report.path.display()
                );
            }
            Err(err) => {
                self.set_phase(WorkflowPhase::Failed);
                error!("❌ Error processing images: {err}");
            }
        }

        // Terminal phases return control to Idle immediately.
        self.set_phase(WorkflowPhase::Idle);
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    async fn run_inner(&self, selection: FileSelection) -> Result<DownloadReport, WorkflowError> {
        self.set_phase(WorkflowPhase::Packaging);
        let files_sent = selection.len();
        let payload = UploadPayload::from_selection(selection);

        self.set_phase(WorkflowPhase::Sending);
        let archive = self.client.process(&payload).await?;
        let archive_bytes = archive.len();

        let path = self.materializer.materialize(archive).await?;

        Ok(DownloadReport {
            path,
            files_sent,
            archive_bytes,
        })
    }
}
