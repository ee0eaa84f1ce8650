//! Recursive Length Prefix (RLP) codec
//!
//! RLP encodes arbitrarily nested lists of byte strings. An item is either a
//! byte string or a list of items; integers are big-endian byte strings with
//! no leading zeros, so zero is the empty string.
//!
//! | Prefix        | Item                                             |
//! |---------------|--------------------------------------------------|
//! | `0x00..=0x7f` | single byte, its own encoding                    |
//! | `0x80..=0xb7` | string of 0-55 bytes, length `prefix - 0x80`     |
//! | `0xb8..=0xbf` | long string, `prefix - 0xb7` length bytes follow |
//! | `0xc0..=0xf7` | list with 0-55 payload bytes                     |
//! | `0xf8..=0xff` | long list, `prefix - 0xf7` length bytes follow   |

mod decode;
mod encode;
mod error;
mod item;
mod traverse;

pub use decode::*;
pub use encode::*;
pub use error::*;
pub use item::*;
pub use traverse::*;

/// Deepest list nesting [`RlpItem::decode`] materializes
pub const MAX_DEPTH: usize = 1024;

/// Payloads shorter than this use the single-byte prefix forms
pub const SIZE_THRESHOLD: usize = 56;

/// [0x80] Prefix base of strings of 0-55 bytes
pub const OFFSET_SHORT_ITEM: u8 = 0x80;

/// [0xb7] Prefix base of strings longer than 55 bytes
pub const OFFSET_LONG_ITEM: u8 = 0xb7;

/// [0xc0] Prefix base of lists with 0-55 payload bytes
pub const OFFSET_SHORT_LIST: u8 = 0xc0;

/// [0xf7] Prefix base of lists with more than 55 payload bytes
pub const OFFSET_LONG_LIST: u8 = 0xf7;

/// Largest length the decoder materializes; longer encoded lengths saturate to it
pub const MAX_LENGTH: usize = i32::MAX as usize;
