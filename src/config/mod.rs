use std::env;
use std::path::PathBuf;

/// Default base URL of the image API
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/images";

/// Filename the processed archive is saved under
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "processed_images.zip";

/// Client configuration for the image-processing backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the image API (default: "http://localhost:8080/api/images")
    pub base_url: String,

    /// Directory the processed archive is saved into (default: current directory)
    pub output_dir: PathBuf,

    /// Filename of the saved archive (default: "processed_images.zip")
    pub download_filename: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            download_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            base_url: env::var("TOOLHUB_BASE_URL").unwrap_or(default.base_url),

            output_dir: env::var("TOOLHUB_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.output_dir),

            download_filename: env::var("TOOLHUB_DOWNLOAD_FILENAME")
                .unwrap_or(default.download_filename),
        }
    }
}
