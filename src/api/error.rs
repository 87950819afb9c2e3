#![allow(unused)]
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::borrow::Cow;

use crate::storage::StorageError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("File upload failed: {details}")]
    UploadFailed { details: Cow<'static, str> },
    #[error("Record creation failed after upload of {url}: {details}")]
    PersistFailed { details: Cow<'static, str>, url: String },
    #[error("Internal Server Error: {details}")]
    Internal { details: Cow<'static, str> },
}

impl Error {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn upload_failed(details: impl Into<Cow<'static, str>>) -> Self {
        Self::UploadFailed { details: details.into() }
    }

    pub fn persist_failed(details: impl Into<Cow<'static, str>>, url: String) -> Self {
        Self::PersistFailed { details: details.into(), url }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match *self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::UploadFailed { .. } | Error::PersistFailed { .. } | Error::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        res.insert_header(("Access-Control-Allow-Origin", "*"));

        match self {
            Error::BadRequest(msg) => res.json(json!({ "error": msg })),
            Error::UploadFailed { details } => {
                res.json(json!({ "error": "File upload failed", "details": details }))
            }
            Error::PersistFailed { details, url } => res.json(json!({
                "error": "File uploaded to S3 but database record creation failed",
                "details": details,
                "url": url,
            })),
            Error::Internal { details } => {
                res.json(json!({ "error": "User registration failed", "details": details }))
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // argon2 errors
    #[error("Hash Error")]
    HashError(#[from] argon2::password_hash::Error),
    // sqlx errors
    #[error("Database Error: {0}")]
    DatabaseError(Cow<'static, str>),
    // object storage and staging errors
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    // Custom Errors
    #[error("Bad Request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("Internal System Error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::BadRequest(msg) => Error::BadRequest(msg),
            other => {
                log::error!("Internal Server Error: {:?}", other);
                Error::Internal { details: other.to_string().into() }
            }
        }
    }
}

// Staging failures surface like any other malformed upload body.
impl From<StorageError> for Error {
    fn from(value: StorageError) -> Self {
        match &value {
            StorageError::FileTooLarge(_) | StorageError::Stream(_) | StorageError::Io(_) => {
                Error::BadRequest(value.to_string().into())
            }
            StorageError::UploadFailed(_) => Error::upload_failed(value.to_string()),
        }
    }
}

impl From<sqlx::Error> for SystemError {
    fn from(err: sqlx::Error) -> Self {
        log::error!("{:?}", err);
        if let sqlx::Error::Database(db_err) = &err {
            return SystemError::DatabaseError(db_err.message().to_string().into());
        }
        SystemError::InternalError(Box::new(err))
    }
}

impl From<sqlx::migrate::MigrateError> for SystemError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        SystemError::DatabaseError(err.to_string().into())
    }
}
