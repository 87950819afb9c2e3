use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;

use crate::storage::{ObjectStorage, StorageError, StorageResult};

/// S3-backed object storage. Credentials come from the default AWS
/// credential chain (environment variables, profile, instance metadata).
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
    region: String,
}

impl S3Storage {
    pub async fn new(bucket: String, region: String) -> Self {
        let region_provider =
            RegionProviderChain::first_try(aws_config::Region::new(region.clone()));

        // Single attempt only; a transient failure surfaces to the caller.
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        S3Storage { client: Client::new(&config), bucket, region }
    }

    fn object_url(&self, key: &str) -> String {
        object_url(&self.bucket, &self.region, key)
    }
}

/// Standard AWS S3 URL format: `https://{bucket}.s3.{region}.amazonaws.com/{key}`
fn object_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key)
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(&self, key: &str, content_type: &str, path: &Path) -> StorageResult<String> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("S3 upload failed for {}/{}: {}", self.bucket, key, e);
                StorageError::UploadFailed(e.to_string())
            })?;

        let url = self.object_url(key);
        log::info!("S3 upload successful: {}", url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_format() {
        let url = object_url("userpdfbucket-gll", "eu-north-1", "upload/1714316400000_a.pdf");
        assert_eq!(
            url,
            "https://userpdfbucket-gll.s3.eu-north-1.amazonaws.com/upload/1714316400000_a.pdf"
        );
    }
}
