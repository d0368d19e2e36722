use super::object_store_repository::{ObjectStore, AUDIO_CONTENT_TYPE};
use async_trait::async_trait;
use aws_sdk_s3::{error::DisplayErrorContext, types::ObjectCannedAcl, Client as S3Client};
use aws_smithy_types::byte_stream::ByteStream;
use std::sync::Arc;

/// AWS S3 implementation of the object store
pub struct S3ObjectStoreRepository {
    s3_client: Arc<S3Client>,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStoreRepository {
    /// `public_base_url` overrides the virtual-hosted S3 URL used to build
    /// returned locations (for S3-compatible stores behind another host).
    pub fn new(
        s3_client: Arc<S3Client>,
        bucket: String,
        region: &str,
        public_base_url: Option<String>,
    ) -> Self {
        let public_base_url = public_base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_base_url(&bucket, region));

        Self {
            s3_client,
            bucket,
            public_base_url,
        }
    }

    pub fn location(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

fn default_base_url(bucket: &str, region: &str) -> String {
    format!("https://{}.s3.{}.amazonaws.com", bucket, region)
}

#[async_trait]
impl ObjectStore for S3ObjectStoreRepository {
    async fn upload(&self, key: &str, audio: ByteStream) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        // PutObject needs a known length, so the stream is drained once here
        let audio_bytes = audio
            .collect()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %key, "Failed to read synthesized audio stream");
                format!("Failed to read audio stream: {}", e)
            })?
            .into_bytes();
        let audio_size = audio_bytes.len();

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            audio_size_bytes = audio_size,
            "Uploading audio to S3"
        );

        self.s3_client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(audio_bytes))
            .content_length(audio_size as i64)
            .content_type(AUDIO_CONTENT_TYPE)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                tracing::error!(
                    error = %message,
                    bucket = %self.bucket,
                    key = %key,
                    "AWS S3 put_object failed"
                );
                message
            })?;

        let location = self.location(key);
        tracing::info!(
            provider = "s3",
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio_size,
            location = %location,
            "Audio uploaded"
        );

        Ok(location)
    }
}
