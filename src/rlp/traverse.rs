//! Structural navigation over encoded RLP buffers
//!
//! Offsets returned here always point at an item prefix (or at the first
//! payload byte of a list), never at decoded values.

use tracing::trace;

use super::decode::{byte_at, calc_length, is_list_prefix};
use super::{RlpError, RlpResult, OFFSET_LONG_ITEM, OFFSET_LONG_LIST, OFFSET_SHORT_ITEM, OFFSET_SHORT_LIST};

/// Layout of the item starting at some offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemHeader {
    /// True for list prefixes (`0xc0..=0xff`)
    pub is_list: bool,
    /// Bytes taken by the prefix and the length bytes
    pub header_length: usize,
    /// Bytes of payload after the header
    pub payload_length: usize,
}

impl ItemHeader {
    /// Total encoded size of the item
    pub fn total_length(&self) -> usize {
        self.header_length.saturating_add(self.payload_length)
    }
}

/// Parse the prefix at `pos`
///
/// A single byte below `0x80` is its own payload, so it reports no header and
/// a payload of one byte.
pub fn item_header(data: &[u8], pos: usize) -> RlpResult<ItemHeader> {
    let prefix = byte_at(data, pos)?;
    let (header_length, payload_length) = match prefix {
        0x00..=0x7f => (0, 1),
        OFFSET_SHORT_ITEM..=OFFSET_LONG_ITEM => (1, (prefix - OFFSET_SHORT_ITEM) as usize),
        0xb8..=0xbf => {
            let length_of_length = (prefix - OFFSET_LONG_ITEM) as usize;
            (1 + length_of_length, calc_length(length_of_length, data, pos)?)
        }
        OFFSET_SHORT_LIST..=OFFSET_LONG_LIST => (1, (prefix - OFFSET_SHORT_LIST) as usize),
        0xf8..=0xff => {
            let length_of_length = (prefix - OFFSET_LONG_LIST) as usize;
            (1 + length_of_length, calc_length(length_of_length, data, pos)?)
        }
    };

    Ok(ItemHeader {
        is_list: is_list_prefix(prefix),
        header_length,
        payload_length,
    })
}

/// Payload length of the item at `index`, or `None` past the end of `data`
pub fn next_item_length(data: &[u8], index: usize) -> RlpResult<Option<usize>> {
    if index >= data.len() {
        return Ok(None);
    }
    Ok(Some(item_header(data, index)?.payload_length))
}

/// Offset of the first payload byte of the list at `pos`
///
/// Long strings are treated as containers as well; any other item yields `None`.
pub fn first_list_element(payload: &[u8], pos: usize) -> Option<usize> {
    let prefix = *payload.get(pos)?;
    match prefix {
        0xf8..=0xff => Some(pos + 1 + (prefix - OFFSET_LONG_LIST) as usize),
        OFFSET_SHORT_LIST..=OFFSET_LONG_LIST => Some(pos + 1),
        0xb8..=0xbf => Some(pos + 1 + (prefix - OFFSET_LONG_ITEM) as usize),
        _ => None,
    }
}

/// Offset just after the item at `pos`, or `None` past the end of `payload`
pub fn next_element_index(payload: &[u8], pos: usize) -> RlpResult<Option<usize>> {
    if pos >= payload.len() {
        return Ok(None);
    }
    let header = item_header(payload, pos)?;
    Ok(Some(pos.saturating_add(header.total_length())))
}

/// Depth-first walk over `data[start..end]`
///
/// The offset of every item met at nesting depth `level_to_index` is pushed
/// onto `sink`, which lets callers enumerate the siblings at that depth. The
/// top-level call uses `level == 0`; payloads of lists are walked at
/// `level + 1`. Any failure is reported as [`RlpError::WrongEncoding`].
pub fn full_traverse(
    data: &[u8],
    level: usize,
    start: usize,
    end: usize,
    level_to_index: usize,
    sink: &mut Vec<usize>,
) -> RlpResult<()> {
    traverse(data, level, start, end, level_to_index, sink)
        .map_err(|e| RlpError::WrongEncoding(Box::new(e)))
}

fn traverse(
    data: &[u8],
    level: usize,
    start: usize,
    end: usize,
    level_to_index: usize,
    sink: &mut Vec<usize>,
) -> RlpResult<()> {
    if data.is_empty() {
        return Ok(());
    }
    if end > data.len() {
        return Err(RlpError::EndOfBuffer {
            needed: end,
            available: data.len(),
        });
    }

    // Open lists as (level, end of payload); the walk never recurses
    let mut frames = vec![(level, end)];
    let mut pos = start;
    while let Some(&(level, end)) = frames.last() {
        if pos >= end {
            frames.pop();
            continue;
        }

        if level == level_to_index {
            sink.push(pos);
        }

        let header = item_header(data, pos)?;
        let next = pos.saturating_add(header.total_length());
        if next > end {
            return Err(RlpError::EndOfBuffer {
                needed: next,
                available: end,
            });
        }

        if header.is_list {
            trace!(level, length = header.payload_length, "found list");
            frames.push((level + 1, next));
            pos += header.header_length;
        } else {
            trace!(level, length = header.payload_length, "found item");
            pos = next;
        }
    }

    Ok(())
}

/// First byte of the first element of the outer list
///
/// An empty string in that position is reported as command `0`.
pub fn command_code(data: &[u8]) -> RlpResult<u8> {
    byte_at(data, 0)?;
    let index = first_list_element(data, 0).ok_or(RlpError::NotAList { index: 0 })?;
    let command = byte_at(data, index)?;
    Ok(if command == OFFSET_SHORT_ITEM { 0 } else { command })
}
