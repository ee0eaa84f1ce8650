//! Utility module - hex parsing and byte helpers

mod bytes;

pub use bytes::*;
