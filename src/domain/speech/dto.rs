use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::error::SpeechError;

/// Characters of input text included in log lines
const LOG_PREVIEW_CHARS: usize = 200;

/// Inbound event body.
///
/// `id` and `ttl_epoch_seconds` are never read from the wire; they are assigned
/// by the pipeline once synthesis has succeeded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SpeechRequest {
    #[serde(rename = "target_polly", default)]
    pub target_language: String,
    #[serde(default)]
    pub voice_id: String,
    #[serde(rename = "text_to_translate", default)]
    pub text: Option<String>,
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub ttl_epoch_seconds: i64,
}

impl SpeechRequest {
    /// Parse a raw event body. Fails when the body is not valid JSON for this
    /// shape or when `text_to_translate` is absent.
    pub fn decode(body: &str) -> Result<Self, SpeechError> {
        let request: SpeechRequest = serde_json::from_str(body)?;

        if request.text.is_none() {
            return Err(SpeechError::InvalidRequest(
                "text_to_translate is required".to_string(),
            ));
        }

        Ok(request)
    }

    /// Parameters handed to the synthesis provider
    pub fn synthesis_params(&self) -> Result<SynthesisParams, SpeechError> {
        let text = self.text.clone().ok_or_else(|| {
            SpeechError::InvalidRequest("text_to_translate is required".to_string())
        })?;

        Ok(SynthesisParams {
            language_code: self.target_language.clone(),
            voice_id: self.voice_id.clone(),
            text,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisParams {
    pub language_code: String,
    pub voice_id: String,
    pub text: String,
}

impl SynthesisParams {
    /// First characters of the text, cut on a char boundary
    pub fn text_preview(&self) -> String {
        self.text.chars().take(LOG_PREVIEW_CHARS).collect()
    }
}

/// Success body: `{"s3Link": "<url>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechResponse {
    #[serde(rename = "s3Link")]
    pub storage_link: String,
}

impl SpeechResponse {
    pub fn encode(&self) -> Result<String, SpeechError> {
        serde_json::to_string(self).map_err(|e| SpeechError::EncodingFailed(e.to_string()))
    }
}

/// Outbound envelope returned to the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl GatewayResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == StatusCode::OK.as_u16()
    }
}

impl From<SpeechError> for GatewayResponse {
    fn from(err: SpeechError) -> Self {
        Self {
            status_code: err.status_code().as_u16(),
            body: err.to_string(),
        }
    }
}
