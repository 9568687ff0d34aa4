use crate::error::WorkflowError;
use crate::models::ProcessedArchive;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Turns a binary response body into a saved archive on disk.
///
/// The write goes through a temp file in the output directory that is only
/// renamed onto the target once fully written, so a failed workflow never
/// leaves a partial archive behind. The temp file is removed on failure.
pub struct DownloadMaterializer {
    output_dir: PathBuf,
    filename: String,
}

impl DownloadMaterializer {
    pub fn new(output_dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            filename: filename.into(),
        }
    }

    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }

    /// Writes the archive to `<output_dir>/<filename>` and returns the path.
    ///
    /// An empty body fails with `Materialization` and writes nothing.
    pub async fn materialize(&self, archive: ProcessedArchive) -> Result<PathBuf, WorkflowError> {
        if archive.is_empty() {
            return Err(WorkflowError::Materialization(
                "response body was empty".to_string(),
            ));
        }

        let dir = self.output_dir.clone();
        let target = self.target_path();
        let bytes = archive.into_bytes();

        let written = tokio::task::spawn_blocking(move || -> std::io::Result<PathBuf> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.flush()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(target)
        })
        .await
        .map_err(|e| WorkflowError::Materialization(format!("write task failed: {e}")))?
        .map_err(|e| WorkflowError::Materialization(e.to_string()))?;

        info!("💾 Saved archive to {}", written.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn writes_archive_bytes_to_target() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = DownloadMaterializer::new(dir.path(), "processed_images.zip");

        let archive = ProcessedArchive::new(Bytes::from_static(b"PK\x03\x04zip-bytes"));
        let path = materializer.materialize(archive).await.unwrap();

        assert_eq!(path, dir.path().join("processed_images.zip"));
        assert_eq!(std::fs::read(&path).unwrap(), b"PK\x03\x04zip-bytes");
    }

    #[tokio::test]
    async fn empty_body_fails_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = DownloadMaterializer::new(dir.path(), "processed_images.zip");

        let err = materializer
            .materialize(ProcessedArchive::new(Bytes::new()))
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Materialization(_)));
        assert!(!materializer.target_path().exists());
    }

    #[tokio::test]
    async fn missing_output_dir_fails_without_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let materializer = DownloadMaterializer::new(&missing, "processed_images.zip");

        let err = materializer
            .materialize(ProcessedArchive::new(Bytes::from_static(b"data")))
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Materialization(_)));
        assert!(!materializer.target_path().exists());
    }
}
