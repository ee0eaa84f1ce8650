//! RLP decoding of single items
//!
//! Every decoder takes the whole buffer plus the index of the item prefix and
//! returns a freshly allocated value.

use num_bigint::BigUint;

use super::{
    RlpError, RlpResult, MAX_LENGTH, OFFSET_LONG_ITEM, OFFSET_SHORT_ITEM, OFFSET_SHORT_LIST,
};

/// Parse the big-endian length of a long item or list
///
/// The `length_of_length` bytes following the prefix at `pos` are read. A
/// zero leading byte is rejected. Lengths above [`MAX_LENGTH`] saturate to it;
/// callers that need the payload treat a saturated length as oversize.
pub fn calc_length(length_of_length: usize, data: &[u8], pos: usize) -> RlpResult<usize> {
    let mut length: u64 = 0;
    for i in 1..=length_of_length {
        let byte = byte_at(data, pos + i)?;

        if byte == 0 && length == 0 {
            return Err(RlpError::LengthLeadingZeros { index: pos });
        }

        length = (length << 8) | byte as u64;
        if length > MAX_LENGTH as u64 {
            return Ok(MAX_LENGTH);
        }
    }
    Ok(length as usize)
}

/// Payload bytes of the string item at `index`
pub fn decode_item_bytes(data: &[u8], index: usize) -> RlpResult<Vec<u8>> {
    let prefix = byte_at(data, index)?;
    match prefix {
        0x00..=0x7f => Ok(vec![prefix]),
        OFFSET_SHORT_ITEM => Ok(Vec::new()),
        0x81..=OFFSET_LONG_ITEM => {
            let length = (prefix - OFFSET_SHORT_ITEM) as usize;
            Ok(payload(data, index + 1, length)?.to_vec())
        }
        0xb8..=0xbf => {
            let length_of_length = (prefix - OFFSET_LONG_ITEM) as usize;
            let length = calc_length(length_of_length, data, index)?;
            if length >= MAX_LENGTH {
                return Err(RlpError::Oversize { index });
            }
            Ok(payload(data, index + 1 + length_of_length, length)?.to_vec())
        }
        _ => Err(RlpError::WrongDecode { prefix, index }),
    }
}

/// Same as [`decode_item_bytes`]
pub fn decode_byte_array(data: &[u8], index: usize) -> RlpResult<Vec<u8>> {
    decode_item_bytes(data, index)
}

/// UTF-8 string held by the item at `index`
pub fn decode_string(data: &[u8], index: usize) -> RlpResult<String> {
    let bytes = decode_item_bytes(data, index)?;
    Ok(String::from_utf8(bytes)?)
}

/// Unsigned big-endian integer held by the item at `index` (empty is zero)
pub fn decode_big_integer(data: &[u8], index: usize) -> RlpResult<BigUint> {
    let bytes = decode_item_bytes(data, index)?;
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Decode an integer of at most 2 bytes
pub fn decode_short(data: &[u8], index: usize) -> RlpResult<u16> {
    decode_unsigned(data, index, std::mem::size_of::<u16>()).map(|v| v as u16)
}

/// Decode an integer of at most 4 bytes
pub fn decode_int(data: &[u8], index: usize) -> RlpResult<u32> {
    decode_unsigned(data, index, std::mem::size_of::<u32>()).map(|v| v as u32)
}

/// Decode an integer of at most 8 bytes
pub fn decode_long(data: &[u8], index: usize) -> RlpResult<u64> {
    decode_unsigned(data, index, std::mem::size_of::<u64>())
}

/// Decode a list of four single-byte items into an IPv4 address
///
/// `index` points at the list prefix; the first octet is read at `index + 1`.
pub fn decode_ip4_bytes(data: &[u8], index: usize) -> RlpResult<[u8; 4]> {
    let mut address = [0u8; 4];
    let mut offset = 1;
    for octet in address.iter_mut() {
        let pos = index + offset;
        *octet = decode_one_byte_item(data, pos)?;
        offset += if byte_at(data, pos)? > OFFSET_SHORT_ITEM { 2 } else { 1 };
    }
    Ok(address)
}

/// Integers are big-endian without leading zeros, so a `0x00` prefix is not
/// a number; zero itself is the empty string `0x80`.
fn decode_unsigned(data: &[u8], index: usize, max_bytes: usize) -> RlpResult<u64> {
    let prefix = byte_at(data, index)?;

    if prefix == 0x00 {
        return Err(RlpError::NotANumber { index });
    }
    if prefix < OFFSET_SHORT_ITEM {
        return Ok(prefix as u64);
    }
    if (prefix as usize) > OFFSET_SHORT_ITEM as usize + max_bytes {
        return Err(RlpError::WrongDecode { prefix, index });
    }

    let length = (prefix - OFFSET_SHORT_ITEM) as usize;
    let bytes = payload(data, index + 1, length)?;
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

fn decode_one_byte_item(data: &[u8], index: usize) -> RlpResult<u8> {
    let prefix = byte_at(data, index)?;
    match prefix {
        OFFSET_SHORT_ITEM => Ok(0),
        0x00..=0x7f => Ok(prefix),
        0x81 => byte_at(data, index + 1),
        _ => Ok(0),
    }
}

pub(crate) fn byte_at(data: &[u8], index: usize) -> RlpResult<u8> {
    data.get(index).copied().ok_or(RlpError::EndOfBuffer {
        needed: index + 1,
        available: data.len(),
    })
}

pub(crate) fn payload(data: &[u8], start: usize, length: usize) -> RlpResult<&[u8]> {
    let end = start.checked_add(length).ok_or(RlpError::Oversize { index: start })?;
    data.get(start..end).ok_or(RlpError::EndOfBuffer {
        needed: end,
        available: data.len(),
    })
}

/// True when `prefix` opens a list
pub(crate) fn is_list_prefix(prefix: u8) -> bool {
    prefix >= OFFSET_SHORT_LIST
}
