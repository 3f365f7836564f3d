use std::io;

use thiserror::Error;

/// Things that can go wrong loading a chord dictionary or running the tool.
/// Converting notes never fails, it just doesn't produce a note.
#[derive(Debug, Error)]
pub enum TheoryError {
    /// An IO error
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// A chord dictionary that isn't JSON of the right shape
    #[error("Chord dictionary syntax error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The same intervals were given two different names
    #[error("Chord {signature} is named both {first:?} and {second:?}")]
    ConflictingChord {
        signature: String,
        first: String,
        second: String,
    },

    /// A chord with no intervals
    #[error("Chord entry {0} has no intervals")]
    EmptySignature(usize),

    /// A bad value in an environment variable
    #[error("Can't use {value:?} for {key}")]
    Config { key: String, value: String },

    /// A command line error
    #[error("{0}")]
    Usage(String),
}

pub type TheoryResult<T> = Result<T, TheoryError>;
