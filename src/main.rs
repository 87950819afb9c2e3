use actix_cors::Cors;
use actix_web::{
    self,
    http::header,
    middleware::Logger,
    web, App, HttpServer,
};
use std::sync::{Arc, LazyLock};

use crate::constants::MAX_UPLOAD_SIZE;
use crate::modules::file_upload::{repository_pg::FilePgRepository, service::FileUploadService};
use crate::modules::registration::{
    repository_pg::UserPgRepository, service::RegistrationService,
};
use crate::storage::{ObjectStorage, S3Storage, Stager};

mod api;
mod configs;
mod constants;
mod modules;
mod storage;
#[cfg(test)]
mod test_support;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[derive(serde::Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

#[actix_web::get("/")]
async fn health_check() -> web::Json<Health> {
    web::Json(Health { status: "Server is running", timestamp: chrono::Utc::now().to_rfc3339() })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        configs::connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let object_storage: Arc<dyn ObjectStorage> =
        Arc::new(S3Storage::new(ENV.s3_bucket.clone(), ENV.aws_region.clone()).await);
    log::info!("AWS configured with region: {}, bucket: {}", ENV.aws_region, ENV.s3_bucket);

    let stager = Stager::new(ENV.upload_dir.clone(), MAX_UPLOAD_SIZE);
    stager.ensure_dir()?;

    let file_repo = Arc::new(FilePgRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserPgRepository::new(db_pool.clone()));

    let upload_service = FileUploadService::new(object_storage.clone(), file_repo);
    let registration_service = RegistrationService::new(object_storage.clone(), user_repo);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION]);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(stager.clone()))
            .app_data(web::Data::new(upload_service.clone()))
            .app_data(web::Data::new(registration_service.clone()))
            .service(health_check)
            .configure(modules::file_upload::route::configure)
            .configure(modules::registration::route::configure)
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
