//! Error kinds for the container, the board and the flat-file format

use thiserror::Error;

/// Failures reported by [`KeyValueStore`](crate::store::KeyValueStore)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `set` was handed the absent-key marker
    #[error("key must not be absent")]
    InvalidKey,
    /// A lookup scanned the live region without a match
    #[error("key not found")]
    KeyNotFound,
}

/// The only error a board or category caller ever sees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no item for image {0:?}")]
    ItemNotFound(String),
}

/// Failures while reading or writing the board text format
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: record has no image location")]
    EmptyLocation { line: usize },
    #[error("line {line}: item declared before any category")]
    OrphanItem { line: usize },
    #[error("cannot write {record:?}: {reason}")]
    Unencodable { record: String, reason: &'static str },
}
