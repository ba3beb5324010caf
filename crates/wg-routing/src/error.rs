use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("service error: {0}")]
    Service(String),

    #[error("response has no features[0].properties.totalTime")]
    MissingTotalTime,

    #[error("routing configuration error: {0}")]
    Config(String),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
