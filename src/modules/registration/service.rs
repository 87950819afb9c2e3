use std::sync::Arc;

use crate::api::error;
use crate::modules::registration::{
    model::{NewUser, RegisterRequest},
    repository::UserRepository,
    schema::RegisterResponse,
};
use crate::storage::{object_key, ObjectStorage, StagedFile};
use crate::utils;

#[derive(Clone)]
pub struct RegistrationService {
    storage: Arc<dyn ObjectStorage>,
    users: Arc<dyn UserRepository>,
}

impl RegistrationService {
    pub fn new(storage: Arc<dyn ObjectStorage>, users: Arc<dyn UserRepository>) -> Self {
        Self { storage, users }
    }

    /// Register a user with their certificate document. The staged
    /// certificate is deleted on every branch.
    pub async fn register(
        &self,
        staged: StagedFile,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, error::SystemError> {
        let result = self.store_and_create(&staged, request).await;
        staged.cleanup().await;
        result
    }

    async fn store_and_create(
        &self,
        staged: &StagedFile,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, error::SystemError> {
        let key = object_key("certificates", &staged.original_filename);
        let url = self.storage.upload(&key, &staged.content_type, &staged.path).await?;

        let password = request.password.as_deref().map(utils::hash_password).transpose()?;

        let new_user = NewUser {
            name: request.name,
            designation: request.designation,
            email: request.email,
            password,
            phone: request.phone,
            account_name: request.account_name,
            account_number: request.account_number,
            ifsc_code: request.ifsc_code,
            gst_number: request.gst_number,
            company_name: request.company_name,
            company_address: request.company_address,
            company_type: request.company_type,
            international: request.international,
            terms: request.terms,
            user_id: request.user_id,
            url: url.clone(),
            kind: request.kind,
        };

        // A failure past this point leaves the uploaded certificate in
        // place; there is no rollback.
        let user = self.users.create(&new_user).await?;
        log::info!("User created successfully: {}", user.id);

        Ok(RegisterResponse { success: true, user: user.into(), file_url: url })
    }
}
