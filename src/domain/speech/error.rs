use axum::http::StatusCode;

/// Failures of the speech pipeline.
///
/// Each variant displays the underlying message verbatim, since that message is
/// what the caller receives as the response body.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    SynthesisFailed(String),
    #[error("{0}")]
    UploadFailed(String),
    #[error("{0}")]
    EncodingFailed(String),
}

impl SpeechError {
    /// Every failure collapses to 400, whether the caller or the provider is at fault.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::SynthesisFailed(_)
            | Self::UploadFailed(_)
            | Self::EncodingFailed(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Short stage name used in log fields
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "decode",
            Self::SynthesisFailed(_) => "synthesize",
            Self::UploadFailed(_) => "upload",
            Self::EncodingFailed(_) => "encode",
        }
    }
}

impl From<serde_json::Error> for SpeechError {
    fn from(err: serde_json::Error) -> Self {
        SpeechError::InvalidRequest(err.to_string())
    }
}
