use bytes::Bytes;

/// One user-chosen file: its original filename plus the raw bytes.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
}

/// Ordered set of files captured for one upload action.
///
/// Immutable once captured; packaging consumes it, so nothing outlives the
/// payload it turns into.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<SelectedFile> {
        self.files
    }
}

/// Binary ZIP body returned by the processing endpoint.
///
/// Opaque to the client; it is handed to the materializer and dropped once
/// the download is on disk.
#[derive(Debug)]
pub struct ProcessedArchive {
    bytes: Bytes,
}

impl ProcessedArchive {
    pub fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}
