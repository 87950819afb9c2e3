use crate::{
    api::error,
    modules::registration::{model::NewUser, repository::UserRepository, schema::UserEntity},
};

#[derive(Clone)]
pub struct UserPgRepository {
    pool: sqlx::PgPool,
}

impl UserPgRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserPgRepository {
    async fn create(&self, user: &NewUser) -> Result<UserEntity, error::SystemError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (
                name, designation, email, password, phone,
                account_name, account_number, ifsc_code, gst_number,
                company_name, company_address, company_type,
                international, terms, user_id, url, type
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.designation)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.phone)
        .bind(&user.account_name)
        .bind(&user.account_number)
        .bind(&user.ifsc_code)
        .bind(&user.gst_number)
        .bind(&user.company_name)
        .bind(&user.company_address)
        .bind(&user.company_type)
        .bind(user.international)
        .bind(user.terms)
        .bind(user.user_id)
        .bind(&user.url)
        .bind(&user.kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity)
    }
}
