// ================================================================
// File: ttvpubsub-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input text is not valid JSON, or not the JSON shape a decoder expects at the top level.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A nested object the decoder cannot do without is absent. Holds the dotted path.
    #[error("Missing required structure: {0}")]
    MissingRequiredStructure(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
