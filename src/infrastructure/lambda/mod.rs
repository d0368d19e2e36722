use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use lambda_runtime::{service_fn, Error as LambdaError, LambdaEvent};
use std::sync::Arc;
use tracing::Instrument;

use crate::domain::speech::{GatewayResponse, SpeechService, SpeechServiceApi};
use crate::error::{AppError, AppResult};

/// Run the speech pipeline for one API Gateway proxy event.
///
/// A missing body is treated as an empty one, which the decoder rejects.
pub async fn handle_proxy_request(
    service: &dyn SpeechServiceApi,
    request: ApiGatewayProxyRequest,
) -> ApiGatewayProxyResponse {
    let body = request.body.unwrap_or_default();
    to_proxy_response(service.handle(&body).await)
}

pub fn to_proxy_response(response: GatewayResponse) -> ApiGatewayProxyResponse {
    let mut proxy = ApiGatewayProxyResponse::default();
    proxy.status_code = i64::from(response.status_code);
    proxy.body = Some(Body::Text(response.body));
    proxy
}

async fn handle_event(
    service: Arc<SpeechService>,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, LambdaError> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);

    Ok(handle_proxy_request(service.as_ref(), event.payload)
        .instrument(span)
        .await)
}

/// Hand control to the Lambda runtime; returns only if the runtime stops
pub async fn start_lambda_runtime(service: Arc<SpeechService>) -> AppResult<()> {
    tracing::info!("Starting Lambda runtime");

    lambda_runtime::run(service_fn(move |event| handle_event(service.clone(), event)))
        .await
        .map_err(|e| AppError::Runtime(e.to_string()))
}
