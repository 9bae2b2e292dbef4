use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Store unavailable ({status}): {message}")]
    Unavailable { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Token signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
