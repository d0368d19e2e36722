use async_trait::async_trait;
use aws_smithy_types::byte_stream::ByteStream;

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Repository for persisting synthesized audio.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload the whole stream under `key` as a publicly readable `audio/mpeg`
    /// object and return a location the caller can resolve.
    ///
    /// # Errors
    /// Returns the provider's error message verbatim. Nothing is retried and a
    /// partially written object is not cleaned up.
    async fn upload(&self, key: &str, audio: ByteStream) -> Result<String, String>;
}
