use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Index not present in the target collection
    #[error("Index {index} out of range for {collection} (len {len})")]
    OutOfRange {
        collection: String,
        index: usize,
        len: usize,
    },

    #[error("Malformed import: {0}")]
    MalformedImport(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn out_of_range(collection: impl Into<String>, index: usize, len: usize) -> Self {
        TrackerError::OutOfRange {
            collection: collection.into(),
            index,
            len,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
