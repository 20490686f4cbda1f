use thiserror::Error;

#[derive(Error, Debug)]
pub enum WxApiError {
    #[error("API request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Response decode failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, WxApiError>;
