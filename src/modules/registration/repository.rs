use crate::{
    api::error,
    modules::registration::{model::NewUser, schema::UserEntity},
};

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &NewUser) -> Result<UserEntity, error::SystemError>;
}
