use actix_multipart::Multipart;
use actix_web::web;
use futures_util::TryStreamExt;

use crate::api::{error, success};
use crate::modules::file_upload::{schema::UploadResponse, service::FileUploadService};
use crate::storage::{StagedFile, Stager};
use crate::utils;

/// Upload file handler: stages the `file` part, reads the optional `type`
/// tag, then hands off to the pipeline.
pub async fn upload_file(
    mut payload: Multipart,
    stager: web::Data<Stager>,
    service: web::Data<FileUploadService>,
) -> Result<success::Success<UploadResponse>, error::Error> {
    let mut staged: Option<StagedFile> = None;
    let mut kind: Option<String> = None;

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

        match name.as_str() {
            "file" => {
                let filename = filename.unwrap_or_else(|| "file".to_string());
                let content_type = utils::declared_content_type(&field, &filename);
                match stager.stage(&filename, &content_type, field).await {
                    Ok(file) => {
                        log::info!(
                            "Received file: {} ({} bytes), type: {}",
                            filename,
                            file.size,
                            content_type
                        );
                        utils::discard_staged(staged.replace(file)).await;
                    }
                    Err(e) => {
                        utils::discard_staged(staged.take()).await;
                        return Err(e.into());
                    }
                }
            }
            "type" => match utils::read_text_field(&mut field).await {
                Ok(value) => kind = Some(value),
                Err(e) => {
                    utils::discard_staged(staged.take()).await;
                    return Err(e);
                }
            },
            _ => {}
        }
    }

    let Some(staged) = staged else {
        return Err(error::Error::bad_request("No file uploaded"));
    };
    let kind = kind.unwrap_or_else(|| "unknown".to_string());

    let response = service.upload(staged, kind).await?;
    Ok(success::Success::ok(response))
}
