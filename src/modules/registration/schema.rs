use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// User entity from the database. Responses use `UserResponse`, which omits
/// the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub gst_number: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_type: Option<String>,
    pub international: bool,
    pub terms: bool,
    pub user_id: Option<i32>,
    pub url: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub account_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub gst_number: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub company_type: Option<String>,
    pub international: bool,
    pub terms: bool,
    pub user_id: Option<i32>,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse {
            id: entity.id,
            name: entity.name,
            designation: entity.designation,
            email: entity.email,
            phone: entity.phone,
            account_name: entity.account_name,
            account_number: entity.account_number,
            ifsc_code: entity.ifsc_code,
            gst_number: entity.gst_number,
            company_name: entity.company_name,
            company_address: entity.company_address,
            company_type: entity.company_type,
            international: entity.international,
            terms: entity.terms,
            user_id: entity.user_id,
            url: entity.url,
            kind: entity.kind,
            created_at: entity.created_at,
        }
    }
}

/// Body of a successful registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: UserResponse,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}
