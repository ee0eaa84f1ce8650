//! Keccak-256 hashing
//!
//! All hashing uses the original Keccak padding (as deployed by Ethereum),
//! not the standardized SHA3-256; the two produce different digests.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use tiny_keccak::{Hasher, Keccak};
use tracing::debug;

use crate::constants::{BLOOM_LENGTH, HASH_LENGTH};
use crate::rlp::{encode_element, encode_list};

/// 32-byte hash output
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; HASH_LENGTH]);

impl Hash {
    pub const fn zero() -> Self {
        Hash([0u8; HASH_LENGTH])
    }

    pub fn from_bytes(bytes: [u8; HASH_LENGTH]) -> Self {
        Hash(bytes)
    }

    /// Create hash from hex string (with or without `0x`)
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        let mut arr = [0u8; HASH_LENGTH];
        hex::decode_to_slice(digits, &mut arr)?;
        Ok(Hash(arr))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// Keccak-256 of arbitrary bytes
///
/// Every call owns its hasher, so this is safe to call from any thread.
pub fn sha3(data: &[u8]) -> Hash {
    let mut out = [0u8; HASH_LENGTH];
    let mut hasher = Keccak::v256();
    hasher.update(data);
    hasher.finalize(&mut out);
    Hash(out)
}

/// Hash of the RLP empty list, the uncles hash of a block without uncles
pub static EMPTY_LIST_HASH: Lazy<Hash> = Lazy::new(|| {
    let hash = sha3(&encode_list::<&[u8]>(&[]));
    debug!(%hash, "computed empty list hash");
    hash
});

/// Hash of the RLP empty string, the root of an empty trie
pub static EMPTY_TRIE_HASH: Lazy<Hash> = Lazy::new(|| {
    let hash = sha3(&encode_element(&[]));
    debug!(%hash, "computed empty trie hash");
    hash
});

/// All-zero 2048-bit logs bloom
pub static ZERO_HASH_2048: [u8; BLOOM_LENGTH] = [0u8; BLOOM_LENGTH];
