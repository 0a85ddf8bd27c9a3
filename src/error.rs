//! Errors produced while decoding STL input.

use std::io;
use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StlError>;

#[derive(Debug, Error)]
pub enum StlError {
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The ASCII grammar wanted one keyword and the file had another.
    #[error("line {line}: expected {expected:?}, but got {found:?}")]
    UnexpectedToken {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input, expected {expected:?}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: can't convert {token:?} to float: {source}")]
    InvalidFloat {
        line: usize,
        token: String,
        source: ParseFloatError,
    },

    /// A finite literal too large for an `f32`.
    #[error("line {line}: can't convert {token:?} to float: value out of range")]
    FloatOutOfRange { line: usize, token: String },

    #[error("ASCII STL input is not valid UTF-8")]
    InvalidUtf8,

    /// A binary file ended before all of its declared triangle records were read.
    #[error("unexpected end of input while reading triangle records: read {read} of {expected}")]
    Truncated { expected: u32, read: u32 },
}
