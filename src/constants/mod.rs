/// Hard cap on a single staged upload, in bytes.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

pub struct Env {
    pub ip: String,
    pub port: u16,
    pub database_url: String,
    pub aws_region: String,
    pub s3_bucket: String,
    pub upload_dir: String,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let aws_region = std::env::var("AWS_REGION").unwrap_or_else(|_| "eu-north-1".to_string());
        let s3_bucket =
            std::env::var("AWS_S3_BUCKET").unwrap_or_else(|_| "userpdfbucket-gll".to_string());
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        Env { ip, port, database_url, aws_region, s3_bucket, upload_dir }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
