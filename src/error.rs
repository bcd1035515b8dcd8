// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Required argument `{argument}` was not supplied")]
    NullInput { argument: &'static str },

    #[error("Argument `{argument}` out of range: {value} (valid range 0..={limit})")]
    OutOfRange {
        argument: &'static str,
        value: i64,
        limit: i64,
    },

    #[error("Buffer too short: needed {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    #[error("Raw copy stage failed: {0}")]
    CopyFailed(String),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Invalid UTF-16 in character data")]
    InvalidUtf16,

    #[error("Invalid UTF-8 in string data")]
    InvalidUtf8,
}

impl CodecError {
    pub(crate) fn out_of_range(argument: &'static str, value: i64, limit: i64) -> Self {
        CodecError::OutOfRange { argument, value, limit }
    }

    /// True for the validation failures raised before any byte is written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CodecError::NullInput { .. }
                | CodecError::OutOfRange { .. }
                | CodecError::BufferTooShort { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
