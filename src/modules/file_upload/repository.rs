use crate::{
    api::error,
    modules::file_upload::{model::NewFileRecord, schema::FileRecord},
};

#[async_trait::async_trait]
pub trait FileRepository: Send + Sync {
    async fn create(&self, file: &NewFileRecord) -> Result<FileRecord, error::SystemError>;
}
