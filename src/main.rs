use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use speech_link::controllers::speech::SpeechController;
use speech_link::domain::speech::{SpeechService, SystemClock};
use speech_link::infrastructure::config::{Config, LogFormat, RuntimeMode};
use speech_link::infrastructure::http::start_http_server;
use speech_link::infrastructure::lambda::start_lambda_runtime;
use speech_link::infrastructure::repositories::{PollyTtsRepository, S3ObjectStoreRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration; a missing bucket stops the process here
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        bucket = %config.bucket,
        runtime_mode = ?config.runtime_mode,
        "Starting speech-link"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    tracing::info!(
        region = ?aws_config.region(),
        "AWS configuration loaded"
    );

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let s3_client = Arc::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::info!("AWS Polly and S3 clients initialized");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject AWS clients)
    let tts_repo = Arc::new(PollyTtsRepository::new(polly_client));
    let object_store = Arc::new(S3ObjectStoreRepository::new(
        s3_client,
        config.bucket.clone(),
        &config.aws_region,
        config.public_base_url.clone(),
    ));

    // 2. Instantiate the pipeline
    let speech_service = Arc::new(SpeechService::new(
        tts_repo,
        object_store,
        Arc::new(SystemClock),
    ));

    // 3. Serve
    match config.runtime_mode {
        RuntimeMode::Lambda => start_lambda_runtime(speech_service).await?,
        RuntimeMode::Http => {
            let speech_controller = Arc::new(SpeechController::new(speech_service));
            start_http_server(config, speech_controller).await?
        }
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "speech_link=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
