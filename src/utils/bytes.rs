//! Hex string parsing with length validation
//!
//! Genesis documents carry every header field as a hex string. These helpers
//! turn them into raw bytes and enforce the field widths.

use thiserror::Error;

/// Byte parsing errors
#[derive(Debug, Error, PartialEq)]
pub enum ByteError {
    #[error("Invalid hex value: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Wrong value length: {hex}, expected length {expected} bytes")]
    WrongLength { hex: String, expected: usize },
    #[error("Wrong value length: {hex}, expected length <= {max} bytes")]
    TooLong { hex: String, max: usize },
}

/// Parse a hex string into bytes
///
/// Accepts an optional `0x` prefix and an odd number of digits (a single `0`
/// is prepended). The result is the unsigned big-endian magnitude; leading
/// zero bytes written in the input are kept, so `0x0001` yields two bytes.
/// An empty string yields an empty vector.
pub fn hex_to_bytes(hex_string: &str) -> Result<Vec<u8>, ByteError> {
    let digits = strip_hex_prefix(hex_string);
    if digits.is_empty() {
        return Ok(Vec::new());
    }

    if digits.len() % 2 == 1 {
        let padded = format!("0{}", digits);
        return Ok(hex::decode(padded)?);
    }

    Ok(hex::decode(digits)?)
}

/// Parse a hex string and validate the resulting byte length
///
/// With `not_greater` unset the result must be exactly `width` bytes long,
/// otherwise it may be at most `width` bytes long.
pub fn hex_to_bytes_checked(
    hex_string: &str,
    width: usize,
    not_greater: bool,
) -> Result<Vec<u8>, ByteError> {
    let bytes = hex_to_bytes(hex_string)?;

    if not_greater {
        if bytes.len() > width {
            return Err(ByteError::TooLong {
                hex: hex_string.to_string(),
                max: width,
            });
        }
    } else if bytes.len() != width {
        return Err(ByteError::WrongLength {
            hex: hex_string.to_string(),
            expected: width,
        });
    }

    Ok(bytes)
}

/// Interpret up to 8 big-endian bytes as an unsigned integer
///
/// Empty input is zero. Callers validate the width beforehand; only the
/// trailing 8 bytes contribute if more are given.
pub fn bytes_to_u64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Minimal big-endian representation of an unsigned integer (zero is empty)
pub fn to_minimal_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    match bytes.iter().position(|&b| b != 0) {
        Some(first_nonzero) => bytes[first_nonzero..].to_vec(),
        None => Vec::new(),
    }
}

fn strip_hex_prefix(hex_string: &str) -> &str {
    hex_string
        .strip_prefix("0x")
        .or_else(|| hex_string.strip_prefix("0X"))
        .unwrap_or(hex_string)
}
