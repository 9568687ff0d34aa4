use crate::error::WorkflowError;
use crate::models::{FileSelection, SelectedFile};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Capability that produces the files for one upload action.
///
/// The selection source is injected into the front ends rather than read
/// from ambient state, so the workflow only ever sees explicit file data.
#[async_trait::async_trait]
pub trait FilePicker: Send + Sync {
    async fn pick(&self) -> Result<FileSelection, WorkflowError>;
}

/// Picker over an explicit, ordered list of paths.
///
/// The CLI builds it from positional arguments; the pipe front end builds
/// it from newline-separated paths on stdin via [`PathPicker::from_reader`].
pub struct PathPicker {
    paths: Vec<PathBuf>,
}

impl PathPicker {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Reads one path per line; blank lines are skipped, order is kept.
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut paths = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            paths.push(PathBuf::from(trimmed));
        }
        Ok(Self::new(paths))
    }
}

#[async_trait::async_trait]
impl FilePicker for PathPicker {
    async fn pick(&self) -> Result<FileSelection, WorkflowError> {
        let mut files = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            files.push(read_selected(path).await?);
        }
        Ok(FileSelection::new(files))
    }
}

async fn read_selected(path: &Path) -> Result<SelectedFile, WorkflowError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| WorkflowError::Selection {
            path: path.to_path_buf(),
            source,
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unnamed".to_string());

    Ok(SelectedFile {
        name,
        bytes: bytes.into(),
    })
}
