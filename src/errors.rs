//! Parse-level errors (no CLI or config concerns)

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while tokenizing lines or folding them into a tree.
///
/// Structural errors are not recoverable: a single misplaced line
/// invalidates parent lookup for everything that follows, so the parser
/// fails on the first anomaly instead of guessing a parent.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line's level skips past the deepest currently-open level.
    ///
    /// `deepest_open` is `-1` when no record is open yet (i.e. the
    /// offending line appeared before any level-0 line).
    #[error("line {line_number}: level {level} skips past deepest open level {deepest_open}")]
    MalformedHierarchy {
        line_number: usize,
        level: u32,
        deepest_open: i64,
    },

    #[error("line {line_number}: invalid level token {token:?}")]
    InvalidLevel { line_number: usize, token: String },

    #[error("line {line_number}: missing tag")]
    MissingTag { line_number: usize },

    #[error("line {line_number}: unterminated cross-reference id {token:?}")]
    UnterminatedXref { line_number: usize, token: String },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;
