use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid version format: {input} (expected: {expected})")]
    InvalidVersionFormat { input: String, expected: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
