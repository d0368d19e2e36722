use super::tts_repository::SpeechSynthesizer;
use crate::domain::speech::SynthesisParams;
use async_trait::async_trait;
use aws_sdk_polly::{
    error::DisplayErrorContext,
    types::{LanguageCode, OutputFormat, VoiceId},
    Client as PollyClient,
};
use aws_smithy_types::byte_stream::ByteStream;
use std::sync::Arc;

/// AWS Polly implementation of the speech synthesizer
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollyTtsRepository {
    async fn synthesize(&self, params: &SynthesisParams) -> Result<ByteStream, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            language = %params.language_code,
            voice = %params.voice_id,
            output_format = "Mp3",
            text_length = params.text.len(),
            text_preview = %params.text_preview(),
            "Calling AWS Polly synthesize_speech"
        );

        // The language code is sent as decoded, even when empty
        let request = self
            .polly_client
            .synthesize_speech()
            .language_code(LanguageCode::from(params.language_code.as_str()))
            .text(params.text.as_str())
            .voice_id(VoiceId::from(params.voice_id.as_str()))
            .output_format(OutputFormat::Mp3);

        let output = request.send().await.map_err(|e| {
            let message = DisplayErrorContext(&e).to_string();
            tracing::error!(
                error = %message,
                language = %params.language_code,
                voice = %params.voice_id,
                text_length = params.text.len(),
                "AWS Polly synthesize_speech failed"
            );
            message
        })?;

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            request_characters = output.request_characters(),
            content_type = output.content_type().unwrap_or_default(),
            "TTS synthesis completed, audio stream ready"
        );

        Ok(output.audio_stream)
    }
}
