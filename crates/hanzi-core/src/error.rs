use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialized output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("Invalid HSK level: {0}")]
    InvalidLevel(u8),
}

/// Invariant violations found in a built or loaded document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("totalCharacters is {declared} but the document holds {actual} entries")]
    TotalMismatch { declared: usize, actual: usize },

    #[error("levels.{label} is {declared} but {actual} entries carry that level")]
    LevelCountMismatch {
        label: String,
        declared: usize,
        actual: usize,
    },

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Id {id} does not match hsk<level>-<number> for level {level}")]
    MalformedId { id: String, level: u8 },

    #[error("Id {0} is not greater than the previous id of its level")]
    IdOutOfOrder(String),
}
