#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Cannot deserialize Suit: {0:?}")]
    UnknownSuit(String),

    #[error("Unrecognized date-time: {0:?}")]
    DateTime(String),

    #[error("Unrecognized time: {0:?}")]
    Time(String),

    #[error("API error ({status}): {message}")]
    Api { status: String, message: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
