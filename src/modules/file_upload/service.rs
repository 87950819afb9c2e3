use std::sync::Arc;

use crate::api::error;
use crate::modules::file_upload::{
    model::NewFileRecord, repository::FileRepository, schema::UploadResponse,
};
use crate::storage::{object_key, ObjectStorage, StagedFile};

#[derive(Clone)]
pub struct FileUploadService {
    storage: Arc<dyn ObjectStorage>,
    files: Arc<dyn FileRepository>,
}

impl FileUploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, files: Arc<dyn FileRepository>) -> Self {
        Self { storage, files }
    }

    /// Run the upload pipeline: push the staged file to object storage, then
    /// record it. The staged file is deleted on every branch.
    pub async fn upload(
        &self,
        staged: StagedFile,
        kind: String,
    ) -> Result<UploadResponse, error::Error> {
        let result = self.store_and_record(&staged, &kind).await;
        staged.cleanup().await;
        result
    }

    async fn store_and_record(
        &self,
        staged: &StagedFile,
        kind: &str,
    ) -> Result<UploadResponse, error::Error> {
        let key = object_key("upload", &staged.original_filename);

        let url = self
            .storage
            .upload(&key, &staged.content_type, &staged.path)
            .await
            .map_err(|e| error::Error::upload_failed(e.to_string()))?;

        // No rollback: a failed record write leaves the stored object in
        // place, and the caller gets its URL back to retry out-of-band.
        let new_record = NewFileRecord { kind: kind.to_string(), url: url.clone() };
        match self.files.create(&new_record).await {
            Ok(record) => {
                log::info!("File record created in database: {}", record.id);
                Ok(UploadResponse {
                    message: "File uploaded and saved".to_string(),
                    field: kind.to_string(),
                    url,
                })
            }
            Err(e) => {
                log::error!("Database save failed: {}", e);
                Err(error::Error::persist_failed(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{staged_fixture, FakeFileRepository, FakeStorage};
    use std::sync::atomic::Ordering;

    fn service(storage: &Arc<FakeStorage>, files: &Arc<FakeFileRepository>) -> FileUploadService {
        FileUploadService::new(storage.clone(), files.clone())
    }

    #[tokio::test]
    async fn test_upload_stores_object_then_record() {
        let storage = Arc::new(FakeStorage::new());
        let files = Arc::new(FakeFileRepository::new());
        let dir = tempfile::tempdir().unwrap();
        let staged = staged_fixture(dir.path(), "report.pdf").await;

        let response =
            service(&storage, &files).upload(staged, "invoice".to_string()).await.unwrap();

        assert_eq!(response.message, "File uploaded and saved");
        assert_eq!(response.field, "invoice");
        assert!(response.url.contains("/upload/"));
        assert!(response.url.ends_with("_report.pdf"));
        assert_eq!(storage.upload_calls.load(Ordering::SeqCst), 1);
        assert_eq!(files.create_calls.load(Ordering::SeqCst), 1);

        let key = storage.last_key.lock().unwrap().clone().unwrap();
        assert!(key.starts_with("upload/"));
        // staged copy is gone after the pipeline
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_skips_record_and_cleans_up() {
        let storage = Arc::new(FakeStorage::failing());
        let files = Arc::new(FakeFileRepository::new());
        let dir = tempfile::tempdir().unwrap();
        let staged = staged_fixture(dir.path(), "report.pdf").await;

        let result = service(&storage, &files).upload(staged, "unknown".to_string()).await;

        assert!(matches!(result, Err(error::Error::UploadFailed { .. })));
        assert_eq!(files.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_record_failure_reports_partial_success_with_url() {
        let storage = Arc::new(FakeStorage::new());
        let files = Arc::new(FakeFileRepository::failing());
        let dir = tempfile::tempdir().unwrap();
        let staged = staged_fixture(dir.path(), "report.pdf").await;

        let result = service(&storage, &files).upload(staged, "invoice".to_string()).await;

        match result {
            Err(error::Error::PersistFailed { url, .. }) => {
                assert!(url.contains("/upload/"));
                assert!(url.ends_with("_report.pdf"));
            }
            other => panic!("Expected PersistFailed, got {:?}", other),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
