use thiserror::Error;

/// Why an intent extraction produced no result
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Response violates schema: {0}")]
    Schema(String),
}
