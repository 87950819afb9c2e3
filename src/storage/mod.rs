use async_trait::async_trait;
use std::path::Path;

pub mod s3;
pub mod stager;

pub use s3::S3Storage;
pub use stager::{StagedFile, Stager};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("File size exceeds maximum allowed size of {0} bytes")]
    FileTooLarge(usize),
    #[error("Malformed upload stream: {0}")]
    Stream(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Object storage abstraction. Implementations upload a staged file under a
/// caller-provided key and return the publicly resolvable location URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<String>;
}

/// Build an object key from a purpose prefix and the original filename,
/// e.g. `upload/1714316400000_report.pdf`. Keys stay unique and
/// human-traceable.
pub fn object_key(prefix: &str, original_filename: &str) -> String {
    format!("{}/{}_{}", prefix, chrono::Utc::now().timestamp_millis(), original_filename)
}
