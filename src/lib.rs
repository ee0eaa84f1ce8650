//! SA Blockchain Core Library
//!
//! Recursive Length Prefix (RLP) codec, Keccak-256 hashing and the block,
//! header and genesis primitives built on top of them.

pub mod block;
pub mod chain;
pub mod crypto;
pub mod node;
pub mod rlp;
pub mod utils;

/// Protocol constants
pub mod constants {
    /// Width of block, parent and mix hashes in bytes
    pub const HASH_LENGTH: usize = 32;

    /// Width of a coinbase address in bytes
    pub const ADDRESS_LENGTH: usize = 20;

    /// Upper bound of the difficulty field in bytes
    pub const MAX_DIFFICULTY_LENGTH: usize = 32;

    /// Upper bound of the header extra data in bytes
    pub const MAX_EXTRA_DATA_LENGTH: usize = 32;

    /// Width of the timestamp and upper bound of the gas limit in bytes
    pub const U64_LENGTH: usize = 8;

    /// Logs bloom width in bytes (2048 bits)
    pub const BLOOM_LENGTH: usize = 256;

    /// Default genesis document used by the node binary
    pub const DEFAULT_GENESIS_PATH: &str = "genesis.json";
}
