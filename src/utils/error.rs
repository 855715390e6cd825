use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("iControl request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("device returned {code}: {message}")]
    DeviceError { code: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("resource has no identity; create or import it first")]
    MissingIdentity,
}

pub type Result<T> = std::result::Result<T, ProfileError>;
