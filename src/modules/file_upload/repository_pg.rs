use crate::{
    api::error,
    modules::file_upload::{model::NewFileRecord, repository::FileRepository, schema::FileRecord},
};

#[derive(Clone)]
pub struct FilePgRepository {
    pool: sqlx::PgPool,
}

impl FilePgRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FileRepository for FilePgRepository {
    async fn create(&self, file: &NewFileRecord) -> Result<FileRecord, error::SystemError> {
        let record = sqlx::query_as::<_, FileRecord>(
            r#"
            INSERT INTO files (type, url)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&file.kind)
        .bind(&file.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }
}
