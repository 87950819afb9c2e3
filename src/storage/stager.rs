use actix_web::web::Bytes;
use futures_util::{Stream, StreamExt};
use rand::Rng;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::storage::{StorageError, StorageResult};

/// Writes incoming upload bodies to uniquely named files under a local
/// staging directory, enforcing a hard size cap while the bytes stream in.
#[derive(Clone)]
pub struct Stager {
    dir: PathBuf,
    max_bytes: usize,
}

/// A file staged on local disk for the duration of one request. The owning
/// pipeline must call `cleanup` on every branch.
#[derive(Debug)]
pub struct StagedFile {
    pub path: PathBuf,
    pub original_filename: String,
    pub content_type: String,
    pub size: u64,
}

impl StagedFile {
    /// Remove the staged file. Failures are logged, never surfaced.
    pub async fn cleanup(self) {
        if let Err(e) = fs::remove_file(&self.path).await {
            log::error!("Failed to clean up local file {}: {}", self.path.display(), e);
        }
    }
}

impl Stager {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self { dir: dir.into(), max_bytes }
    }

    /// Create the staging directory if it does not exist yet. Leftovers from
    /// crashed requests are not purged.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    // Collision-resistant, not collision-proof.
    fn unique_path(&self, original_filename: &str) -> PathBuf {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
        self.dir.join(format!("{}-{}-{}", millis, suffix, original_filename))
    }

    /// Stream an upload body to a uniquely named path under the staging
    /// directory. Crossing the size cap aborts the write and deletes the
    /// partial file before the rest of the body is consumed.
    pub async fn stage<S, E>(
        &self,
        original_filename: &str,
        content_type: &str,
        body: S,
    ) -> StorageResult<StagedFile>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: std::fmt::Display,
    {
        let path = self.unique_path(original_filename);
        let mut file = fs::File::create(&path).await?;

        match self.write_body(&mut file, body).await {
            Ok(size) => Ok(StagedFile {
                path,
                original_filename: original_filename.to_string(),
                content_type: content_type.to_string(),
                size,
            }),
            Err(e) => {
                drop(file);
                if let Err(remove_err) = fs::remove_file(&path).await {
                    log::warn!(
                        "Failed to remove partial staged file {}: {}",
                        path.display(),
                        remove_err
                    );
                }
                Err(e)
            }
        }
    }

    async fn write_body<S, E>(&self, file: &mut fs::File, mut body: S) -> StorageResult<u64>
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin,
        E: std::fmt::Display,
    {
        let mut size: usize = 0;
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| StorageError::Stream(e.to_string()))?;
            size += chunk.len();
            if size > self.max_bytes {
                return Err(StorageError::FileTooLarge(self.max_bytes));
            }
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        Ok(size as u64)
    }
}
