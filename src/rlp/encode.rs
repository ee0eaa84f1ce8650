//! RLP encoding

use num_bigint::BigUint;

use super::{OFFSET_LONG_ITEM, OFFSET_LONG_LIST, OFFSET_SHORT_ITEM, OFFSET_SHORT_LIST, SIZE_THRESHOLD};
use crate::utils::to_minimal_be_bytes;

/// Encode a byte string as a single RLP item
///
/// A single byte below `0x80` (including `0x00`) is its own encoding and the
/// empty string encodes to `0x80`.
pub fn encode_element(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return vec![OFFSET_SHORT_ITEM];
    }

    if data.len() == 1 && data[0] < OFFSET_SHORT_ITEM {
        return data.to_vec();
    }

    let mut encoded = encode_long_element_header(data.len());
    encoded.extend_from_slice(data);
    encoded
}

/// Wrap already-encoded items into an RLP list
pub fn encode_list<T: AsRef<[u8]>>(elements: &[T]) -> Vec<u8> {
    let total_length: usize = elements.iter().map(|e| e.as_ref().len()).sum();

    let mut encoded = encode_list_header(total_length);
    encoded.reserve(total_length);
    for element in elements {
        encoded.extend_from_slice(element.as_ref());
    }
    encoded
}

/// Prefix of a list whose concatenated payload is `size` bytes long
pub fn encode_list_header(size: usize) -> Vec<u8> {
    encode_prefix(size, OFFSET_SHORT_LIST, OFFSET_LONG_LIST)
}

/// Prefix of a byte string of `length` bytes (short form below 56 bytes)
pub fn encode_long_element_header(length: usize) -> Vec<u8> {
    encode_prefix(length, OFFSET_SHORT_ITEM, OFFSET_LONG_ITEM)
}

/// Encode an unsigned integer as its minimal big-endian byte string
pub fn encode_u64(value: u64) -> Vec<u8> {
    encode_element(&to_minimal_be_bytes(value))
}

/// Encode an arbitrary precision unsigned integer (zero is the empty string)
pub fn encode_big_uint(value: &BigUint) -> Vec<u8> {
    if value.bits() == 0 {
        return encode_element(&[]);
    }
    encode_element(&value.to_bytes_be())
}

/// Encode a string as its UTF-8 bytes
pub fn encode_str(value: &str) -> Vec<u8> {
    encode_element(value.as_bytes())
}

fn encode_prefix(length: usize, short_offset: u8, long_offset: u8) -> Vec<u8> {
    if length < SIZE_THRESHOLD {
        return vec![short_offset + length as u8];
    }

    let length_bytes = to_minimal_be_bytes(length as u64);
    let mut header = Vec::with_capacity(1 + length_bytes.len());
    header.push(long_offset + length_bytes.len() as u8);
    header.extend_from_slice(&length_bytes);
    header
}
