use super::dto::{GatewayResponse, SpeechRequest, SpeechResponse};
use super::error::SpeechError;
use super::storage_key::{assign_identity, storage_key, Clock};
use crate::infrastructure::repositories::{ObjectStore, SpeechSynthesizer};
use async_trait::async_trait;
use std::sync::Arc;

/// Text-to-speech pipeline: decode, synthesize, assign identity, upload, encode.
///
/// Built once per process; holds no per-invocation state.
pub struct SpeechService {
    tts_repo: Arc<dyn SpeechSynthesizer>,
    object_store: Arc<dyn ObjectStore>,
    clock: Arc<dyn Clock>,
}

impl SpeechService {
    pub fn new(
        tts_repo: Arc<dyn SpeechSynthesizer>,
        object_store: Arc<dyn ObjectStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tts_repo,
            object_store,
            clock,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Run the pipeline for one raw event body
    ///
    /// Never fails: errors become a 400 response whose body is the raw error
    /// message, success is a 200 carrying `{"s3Link": ...}`.
    async fn handle(&self, raw_body: &str) -> GatewayResponse;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn handle(&self, raw_body: &str) -> GatewayResponse {
        let result = self
            .process(raw_body)
            .await
            .and_then(|response| response.encode());

        match result {
            Ok(body) => {
                tracing::info!(status = 200, "Returning response to gateway");
                GatewayResponse::ok(body)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    stage = e.stage(),
                    status = e.status_code().as_u16(),
                    "Speech request failed"
                );
                GatewayResponse::from(e)
            }
        }
    }
}

impl SpeechService {
    /// Everything but the final encoding step
    pub async fn process(&self, raw_body: &str) -> Result<SpeechResponse, SpeechError> {
        // 1. Decode
        let mut request = SpeechRequest::decode(raw_body)?;
        let params = request.synthesis_params()?;

        tracing::info!(
            language = %params.language_code,
            voice = %params.voice_id,
            text_length = params.text.len(),
            text_preview = %params.text_preview(),
            "Speech request decoded"
        );

        // 2. Synthesize
        let audio = self
            .tts_repo
            .synthesize(&params)
            .await
            .map_err(SpeechError::SynthesisFailed)?;

        // 3. Identify
        assign_identity(&mut request, self.clock.now());

        tracing::info!(
            id = %request.id,
            ttl_epoch_seconds = request.ttl_epoch_seconds,
            "Identity assigned"
        );

        // 4. Upload, keyed by the date at upload time
        let key = storage_key(&request.id, self.clock.now());
        tracing::info!(key = %key, "Storage key");

        let storage_link = self
            .object_store
            .upload(&key, audio)
            .await
            .map_err(SpeechError::UploadFailed)?;

        tracing::info!(location = %storage_link, "Sent speech to object store");

        Ok(SpeechResponse { storage_link })
    }
}
