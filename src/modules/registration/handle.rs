use actix_multipart::Multipart;
use actix_web::web;
use futures_util::TryStreamExt;
use std::collections::HashMap;

use crate::api::{error, success};
use crate::modules::registration::{
    model::RegisterRequest, schema::RegisterResponse, service::RegistrationService,
};
use crate::storage::{StagedFile, Stager};
use crate::utils;

/// Registration handler: stages the required `certificate` part, collects
/// the profile text fields, decodes them, then hands off to the pipeline.
pub async fn register(
    mut payload: Multipart,
    stager: web::Data<Stager>,
    service: web::Data<RegistrationService>,
) -> Result<success::Success<RegisterResponse>, error::Error> {
    let mut staged: Option<StagedFile> = None;
    let mut fields: HashMap<String, String> = HashMap::new();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                utils::discard_staged(staged.take()).await;
                return Err(error::Error::bad_request(e.to_string()));
            }
        };

        let Some(cd) = field.content_disposition() else { continue };
        let name = cd.get_name().unwrap_or("").to_string();
        let filename = cd.get_filename().map(str::to_string);

        match (name.as_str(), filename) {
            ("certificate", Some(filename)) => {
                let content_type = utils::declared_content_type(&field, &filename);
                match stager.stage(&filename, &content_type, field).await {
                    Ok(file) => {
                        log::info!("Certificate received: {} ({} bytes)", filename, file.size);
                        utils::discard_staged(staged.replace(file)).await;
                    }
                    Err(e) => {
                        utils::discard_staged(staged.take()).await;
                        return Err(e.into());
                    }
                }
            }
            (_, Some(_)) => {}
            (_, None) => match utils::read_text_field(&mut field).await {
                Ok(value) => {
                    fields.insert(name, value);
                }
                Err(e) => {
                    utils::discard_staged(staged.take()).await;
                    return Err(e);
                }
            },
        }
    }

    let Some(staged) = staged else {
        return Err(error::Error::bad_request("Certificate file is required"));
    };

    let request = RegisterRequest::from_fields(fields);
    let response = service.register(staged, request).await?;
    Ok(success::Success::created(response))
}
