//! In-memory chain state
//!
//! Tracks the blocks applied on top of genesis and the current best block.

use std::collections::{BTreeMap, HashMap};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, trace};

use crate::block::{Block, BlockHeader, Transaction};
use crate::crypto::{sha3, Hash};
use crate::rlp::encode_list;
use super::BlockChain;

/// Chain state errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("Block {number} does not extend the best block {tip}")]
    NotOnTip { number: u64, tip: Hash },
    #[error("Block {number} has wrong height, expected {expected}")]
    WrongNumber { number: u64, expected: u64 },
    #[error("Block {parent} has no successor height")]
    HeightOverflow { parent: u64 },
}

/// Complete chain state
#[derive(Debug)]
pub struct ChainState {
    /// Current block height
    pub height: u64,
    /// Hash of the current tip
    pub tip_hash: Hash,
    /// Block at the tip
    best: Block,
    /// Block index: hash -> (block, height)
    block_index: HashMap<Hash, (Block, u64)>,
}

impl ChainState {
    /// Create a new chain state from genesis
    pub fn new(genesis_block: Block) -> Self {
        let tip_hash = genesis_block.hash();
        let height = genesis_block.number();

        let mut block_index = HashMap::new();
        block_index.insert(tip_hash, (genesis_block.clone(), height));

        Self {
            height,
            tip_hash,
            best: genesis_block,
            block_index,
        }
    }

    /// Append a block on top of the best block
    pub fn apply_block(&mut self, block: Block) -> Result<(), ChainError> {
        if block.header.info().parent_hash() != self.tip_hash.as_bytes() {
            return Err(ChainError::NotOnTip {
                number: block.number(),
                tip: self.tip_hash,
            });
        }

        let expected = self
            .height
            .checked_add(1)
            .ok_or(ChainError::HeightOverflow { parent: self.height })?;
        if block.number() != expected {
            return Err(ChainError::WrongNumber {
                number: block.number(),
                expected,
            });
        }

        let hash = block.hash();
        debug!(%hash, number = expected, "applied block");

        self.height = expected;
        self.tip_hash = hash;
        self.block_index.insert(hash, (block.clone(), expected));
        self.best = block;
        Ok(())
    }

    /// Get a block by hash
    pub fn get_block(&self, hash: &Hash) -> Option<&Block> {
        self.block_index.get(hash).map(|(block, _)| block)
    }

    /// Height of a known block
    pub fn get_height(&self, hash: &Hash) -> Option<u64> {
        self.block_index.get(hash).map(|(_, height)| *height)
    }

    pub fn block_count(&self) -> usize {
        self.block_index.len()
    }

    /// Same as [`BlockChain::create_new_block`] with an explicit timestamp
    ///
    /// The child inherits gas limit, coinbase, difficulty, extra data, mix
    /// hash and nonce from its parent. Its timestamp is at least one second
    /// past the parent's.
    pub fn create_new_block_at(
        &self,
        parent: &Block,
        timestamp: u64,
        transactions: Option<Vec<Transaction>>,
        uncles: Option<Vec<BlockHeader>>,
    ) -> Result<Block, ChainError> {
        let number = parent
            .number()
            .checked_add(1)
            .ok_or(ChainError::HeightOverflow { parent: parent.number() })?;
        let uncles = uncles.unwrap_or_default();
        let encoded_uncles: Vec<Vec<u8>> = uncles.iter().map(BlockHeader::encode).collect();

        let mut info = parent.header.info().clone();
        info.set_alloc(BTreeMap::new());
        info.set_parent_hash_bytes(parent.hash().to_vec());
        info.set_number(number);
        info.set_uncles_hash(sha3(&encode_list(&encoded_uncles)).to_vec());
        info.set_gas_used(0);
        info.set_timestamp_value(timestamp.max(parent.header.info().timestamp().saturating_add(1)));

        let block = Block::new(info, transactions, Some(uncles));
        for transaction in &block.transactions {
            trace!(number, hash = %transaction.hash(), "included transaction");
        }
        debug!(
            parent = %parent.hash(),
            number = block.number(),
            transactions = block.transactions.len(),
            uncles = block.uncles.len(),
            "created block"
        );
        Ok(block)
    }
}

impl BlockChain for ChainState {
    fn best_block(&self) -> &Block {
        &self.best
    }

    fn create_new_block(
        &self,
        parent: &Block,
        transactions: Option<Vec<Transaction>>,
        uncles: Option<Vec<BlockHeader>>,
    ) -> Result<Block, ChainError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.create_new_block_at(parent, now, transactions, uncles)
    }
}
