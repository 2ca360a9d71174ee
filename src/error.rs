use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtbError {
    #[error("Credentials not found: {0}")]
    CredentialsNotFound(String),

    #[error("Invalid service account key: {0}")]
    InvalidKeyFile(String),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("API request failed: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("JWT signing error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RtbError>;
