use crate::error::AppError;
use std::env;

/// Set by the Lambda execution environment
const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub aws_region: String,
    pub public_base_url: Option<String>,
    pub runtime_mode: RuntimeMode,
    pub log_format: LogFormat,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuntimeMode {
    Lambda,
    Http,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any variable source. Fails when the bucket is
    /// missing or blank, or a numeric setting does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup("S3BUCKET")
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .ok_or_else(|| {
                AppError::Config("S3BUCKET must be set to a non-empty bucket name".to_string())
            })?;

        let runtime_mode = match lookup("RUNTIME_MODE").map(|s| s.to_lowercase()).as_deref() {
            Some("lambda") => RuntimeMode::Lambda,
            Some("http") => RuntimeMode::Http,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "RUNTIME_MODE must be 'lambda' or 'http', got '{}'",
                    other
                )))
            }
            None if lookup(LAMBDA_RUNTIME_API).is_some() => RuntimeMode::Lambda,
            None => RuntimeMode::Http,
        };

        // Lambda defaults to JSON lines
        let log_format = match lookup("LOG_FORMAT").map(|s| s.to_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Pretty,
            None if runtime_mode == RuntimeMode::Lambda => LogFormat::Json,
            None => LogFormat::Pretty,
        };

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("PORT is not a valid port: {}", e)))?;

        Ok(Config {
            bucket,
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "eu-west-1".to_string()),
            public_base_url: lookup("S3_PUBLIC_BASE_URL").filter(|url| !url.trim().is_empty()),
            runtime_mode,
            log_format,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }
}
