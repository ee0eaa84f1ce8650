//! Block header

use crate::crypto::{sha3, Hash, EMPTY_TRIE_HASH};
use crate::rlp::{encode_element, encode_list, encode_u64};
use super::BlockHeaderInfo;

/// Upper bound of an encoded header in bytes
pub const MAX_HEADER_SIZE: usize = 592;

/// Block header built from validated header info
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    /// Root of the (empty) state trie
    state_root: Hash,
    info: BlockHeaderInfo,
}

impl BlockHeader {
    pub fn new(info: BlockHeaderInfo) -> Self {
        Self {
            state_root: *EMPTY_TRIE_HASH,
            info,
        }
    }

    pub fn number(&self) -> u64 {
        self.info.number()
    }

    pub fn state_root(&self) -> &Hash {
        &self.state_root
    }

    pub fn info(&self) -> &BlockHeaderInfo {
        &self.info
    }

    /// RLP list of the header fields
    ///
    /// Field order: parent hash, uncles hash, coinbase, state root, logs
    /// bloom, difficulty, number, gas limit, gas used, timestamp, extra data,
    /// mix hash, nonce.
    pub fn encode(&self) -> Vec<u8> {
        let info = &self.info;
        encode_list(&[
            encode_element(info.parent_hash()),
            encode_element(info.uncles_hash()),
            encode_element(info.coinbase()),
            encode_element(self.state_root.as_bytes()),
            encode_element(info.logs_bloom()),
            encode_element(info.difficulty()),
            encode_u64(info.number()),
            encode_u64(info.gas_limit()),
            encode_u64(info.gas_used()),
            encode_u64(info.timestamp()),
            encode_element(info.extra_data()),
            encode_element(info.mixhash()),
            encode_element(info.nonce()),
        ])
    }

    /// Keccak-256 of the encoded header
    pub fn hash(&self) -> Hash {
        sha3(&self.encode())
    }
}
