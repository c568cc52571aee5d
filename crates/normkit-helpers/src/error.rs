use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    #[error("failed to read {path}: {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),
}

pub type Result<T> = std::result::Result<T, HelperError>;
