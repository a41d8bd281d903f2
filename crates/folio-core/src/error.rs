use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
