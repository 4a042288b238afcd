use std::io;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("row index {index} is out of bounds for {len} rows")]
    RowOutOfBounds { index: usize, len: usize },
    #[error("field index {index} is out of bounds for {len} fields")]
    FieldOutOfBounds { index: usize, len: usize },
    #[error("row index {0} is negative")]
    NegativeRow(i64),
    #[error("field index {0} is negative")]
    NegativeField(i64),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("field config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field config root is not an array")]
    NotAnArray,
    #[error("field config entry {index} is not an object")]
    NotAnObject { index: usize },
}

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
