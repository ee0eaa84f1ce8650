//! Error types for RLP operations

use thiserror::Error;

/// RLP codec errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RlpError {
    #[error("wrong decode attempt: prefix 0x{prefix:02x} at index {index}")]
    WrongDecode { prefix: u8, index: usize },
    #[error("not a number: zero byte at index {index}")]
    NotANumber { index: usize },
    #[error("RLP length contains leading zeros at index {index}")]
    LengthLeadingZeros { index: usize },
    #[error("RLP wrong encoding: {0}")]
    WrongEncoding(Box<RlpError>),
    #[error("unexpected end of buffer: needed {needed} bytes, have {available}")]
    EndOfBuffer { needed: usize, available: usize },
    #[error("item length at index {index} exceeds the supported maximum")]
    Oversize { index: usize },
    #[error("invalid utf-8 string: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("item at index {index} is not a list")]
    NotAList { index: usize },
    #[error("trailing bytes after item: {0}")]
    TrailingBytes(usize),
    #[error("list nesting at index {index} exceeds depth {max}")]
    TooDeep { index: usize, max: usize },
}

/// Result type for RLP operations
pub type RlpResult<T> = Result<T, RlpError>;
