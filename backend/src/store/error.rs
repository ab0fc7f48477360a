use std::{io, path::PathBuf};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store is not available")]
    Unavailable,

    #[error("write to collection '{collection}' failed: {source}")]
    Write {
        collection: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("read from collection '{collection}' failed: {source}")]
    Read {
        collection: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("document for collection '{0}' is not a JSON object")]
    InvalidDocument(String),

    #[error("cannot create store directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open document store: {0}")]
    Open(#[from] rusqlite::Error),

    #[error("stored document in '{collection}' is not valid JSON: {source}")]
    Corrupt {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
}
