//! Block structure
//!
//! A block is a header plus the ordered transactions and uncle headers.

use crate::crypto::Hash;
use crate::rlp::encode_list;
use super::{BlockHeader, BlockHeaderInfo, Transaction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
    pub uncles: Vec<BlockHeader>,
}

impl Block {
    /// Create a block; absent transaction or uncle lists become empty
    pub fn new(
        info: BlockHeaderInfo,
        transactions: Option<Vec<Transaction>>,
        uncles: Option<Vec<BlockHeader>>,
    ) -> Self {
        Self {
            header: BlockHeader::new(info),
            transactions: transactions.unwrap_or_default(),
            uncles: uncles.unwrap_or_default(),
        }
    }

    pub fn number(&self) -> u64 {
        self.header.number()
    }

    /// Block hash (the header hash)
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// RLP list `[header, [transactions], [uncles]]`
    pub fn encode(&self) -> Vec<u8> {
        let transactions: Vec<&[u8]> = self.transactions.iter().map(Transaction::encoded).collect();
        let uncles: Vec<Vec<u8>> = self.uncles.iter().map(BlockHeader::encode).collect();

        encode_list(&[
            self.header.encode(),
            encode_list(&transactions),
            encode_list(&uncles),
        ])
    }
}
