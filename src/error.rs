use std::time::Duration;
use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("location server responded with {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed location response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("coordinate out of range: latitude = {latitude}, longitude = {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("location request timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
