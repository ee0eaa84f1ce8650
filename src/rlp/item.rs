//! Owned tree representation of RLP items

use super::decode::payload;
use super::{encode_element, encode_list, item_header, RlpError, RlpResult, MAX_DEPTH};

/// A decoded RLP item: a byte string or a list of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    Bytes(Vec<u8>),
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Decode exactly one item spanning the whole buffer
    pub fn decode(data: &[u8]) -> RlpResult<Self> {
        let (item, consumed) = Self::decode_at(data, 0)?;
        if consumed != data.len() {
            return Err(RlpError::TrailingBytes(data.len() - consumed));
        }
        Ok(item)
    }

    /// Decode the item at `pos`, returning it with the offset just past it
    ///
    /// Lists nested deeper than [`MAX_DEPTH`] fail with [`RlpError::TooDeep`].
    pub fn decode_at(data: &[u8], pos: usize) -> RlpResult<(Self, usize)> {
        Self::decode_nested(data, pos, 0)
    }

    fn decode_nested(data: &[u8], pos: usize, depth: usize) -> RlpResult<(Self, usize)> {
        let header = item_header(data, pos)?;
        let start = pos + header.header_length;
        let body = payload(data, start, header.payload_length)?;
        let end = start + header.payload_length;

        if !header.is_list {
            return Ok((RlpItem::Bytes(body.to_vec()), end));
        }
        if depth >= MAX_DEPTH {
            return Err(RlpError::TooDeep { index: pos, max: MAX_DEPTH });
        }

        let mut items = Vec::new();
        let mut cursor = 0;
        while cursor < body.len() {
            let (item, next) = Self::decode_nested(body, cursor, depth + 1)?;
            items.push(item);
            cursor = next;
        }
        Ok((RlpItem::List(items), end))
    }

    /// Canonical encoding of this item
    pub fn encode(&self) -> Vec<u8> {
        match self {
            RlpItem::Bytes(bytes) => encode_element(bytes),
            RlpItem::List(items) => {
                let encoded: Vec<Vec<u8>> = items.iter().map(RlpItem::encode).collect();
                encode_list(&encoded)
            }
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RlpItem::List(_))
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            RlpItem::Bytes(bytes) => Some(bytes.as_slice()),
            RlpItem::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[RlpItem]> {
        match self {
            RlpItem::List(items) => Some(items.as_slice()),
            RlpItem::Bytes(_) => None,
        }
    }
}

impl From<Vec<u8>> for RlpItem {
    fn from(bytes: Vec<u8>) -> Self {
        RlpItem::Bytes(bytes)
    }
}

impl From<&str> for RlpItem {
    fn from(value: &str) -> Self {
        RlpItem::Bytes(value.as_bytes().to_vec())
    }
}

impl From<Vec<RlpItem>> for RlpItem {
    fn from(items: Vec<RlpItem>) -> Self {
        RlpItem::List(items)
    }
}
