use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::domain::speech::{SpeechService, SpeechServiceApi};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /speech - Local stand-in for the gateway event
    ///
    /// The request body is passed through untouched as the event body and the
    /// pipeline's status and body are returned as-is.
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        body: String,
    ) -> (StatusCode, HeaderMap, String) {
        let response = controller.speech_service.handle(&body).await;

        let status = StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::BAD_REQUEST);

        // Success bodies are JSON, error bodies are the bare message
        let content_type = if response.is_success() {
            "application/json"
        } else {
            "text/plain; charset=utf-8"
        };
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));

        (status, headers, response.body)
    }
}
