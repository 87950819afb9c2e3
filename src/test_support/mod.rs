#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::api::error::SystemError;
use crate::modules::file_upload::{
    model::NewFileRecord, repository::FileRepository, schema::FileRecord,
};
use crate::modules::registration::{
    model::NewUser, repository::UserRepository, schema::UserEntity,
};
use crate::storage::{ObjectStorage, StagedFile, StorageError, StorageResult};

/// Counting object-storage fake with deterministic URLs.
pub struct FakeStorage {
    pub upload_calls: AtomicUsize,
    pub last_key: Mutex<Option<String>>,
    fail: bool,
}

impl FakeStorage {
    pub fn new() -> Self {
        Self { upload_calls: AtomicUsize::new(0), last_key: Mutex::new(None), fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    async fn upload(&self, key: &str, _content_type: &str, _path: &Path) -> StorageResult<String> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StorageError::UploadFailed("simulated S3 outage".to_string()));
        }
        *self.last_key.lock().unwrap() = Some(key.to_string());
        Ok(format!("https://test-bucket.s3.eu-north-1.amazonaws.com/{}", key))
    }
}

pub struct FakeFileRepository {
    pub create_calls: AtomicUsize,
    fail: bool,
}

impl FakeFileRepository {
    pub fn new() -> Self {
        Self { create_calls: AtomicUsize::new(0), fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }
}

#[async_trait]
impl FileRepository for FakeFileRepository {
    async fn create(&self, file: &NewFileRecord) -> Result<FileRecord, SystemError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SystemError::DatabaseError("simulated insert failure".into()));
        }
        Ok(FileRecord {
            id: Uuid::now_v7(),
            kind: file.kind.clone(),
            url: file.url.clone(),
            created_at: chrono::Utc::now(),
        })
    }
}

pub struct FakeUserRepository {
    pub create_calls: AtomicUsize,
    pub last_user: Mutex<Option<NewUser>>,
    fail: bool,
}

impl FakeUserRepository {
    pub fn new() -> Self {
        Self { create_calls: AtomicUsize::new(0), last_user: Mutex::new(None), fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn create(&self, user: &NewUser) -> Result<UserEntity, SystemError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SystemError::DatabaseError("simulated insert failure".into()));
        }
        *self.last_user.lock().unwrap() = Some(user.clone());
        Ok(UserEntity {
            id: Uuid::now_v7(),
            name: user.name.clone(),
            designation: user.designation.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            phone: user.phone.clone(),
            account_name: user.account_name.clone(),
            account_number: user.account_number.clone(),
            ifsc_code: user.ifsc_code.clone(),
            gst_number: user.gst_number.clone(),
            company_name: user.company_name.clone(),
            company_address: user.company_address.clone(),
            company_type: user.company_type.clone(),
            international: user.international,
            terms: user.terms,
            user_id: user.user_id,
            url: user.url.clone(),
            kind: user.kind.clone(),
            created_at: chrono::Utc::now(),
        })
    }
}

/// Pre-staged file fixture for service-level tests.
pub async fn staged_fixture(dir: &Path, name: &str) -> StagedFile {
    let path = dir.join(format!("{}-314159265-{}", chrono::Utc::now().timestamp_millis(), name));
    tokio::fs::write(&path, b"fixture bytes").await.unwrap();
    StagedFile {
        path,
        original_filename: name.to_string(),
        content_type: "application/pdf".to_string(),
        size: 13,
    }
}

/// Multipart body parts for hand-built test requests.
pub enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File { name: &'a str, filename: &'a str, content_type: &'a str, data: &'a [u8] },
}

pub fn multipart_body(boundary: &str, parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File { name, filename, content_type, data } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, filename, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}
