//! Transaction carrier
//!
//! Transactions are opaque at this layer: only their encoded form is kept.

use crate::crypto::{sha3, Hash};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    encoded: Vec<u8>,
}

impl Transaction {
    /// Wrap an already RLP-encoded transaction
    pub fn from_encoded(encoded: Vec<u8>) -> Self {
        Self { encoded }
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    pub fn hash(&self) -> Hash {
        sha3(&self.encoded)
    }
}
