//! Cryptography module - Keccak-256 hashing and canonical empty hashes

mod hash;

pub use hash::*;
