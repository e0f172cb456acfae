use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("search keyword is empty")]
    EmptyKeyword,

    #[error("YOUTUBE_API_KEY is not configured")]
    MissingApiKey,

    #[error("invalid duration `{0}`")]
    InvalidDuration(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("failed to parse response: {0}")]
    Decode(String),
}
