use crate::domain::speech::SynthesisParams;
use async_trait::async_trait;
use aws_smithy_types::byte_stream::ByteStream;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider (AWS Polly in production, fakes in tests)
///
/// The returned stream is read exactly once, by the object store upload.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `params.text` as MP3 audio with the requested voice and language
    ///
    /// # Errors
    /// Returns the provider's error message verbatim if the request is rejected
    /// or the provider is unavailable
    async fn synthesize(&self, params: &SynthesisParams) -> Result<ByteStream, String>;
}
