//! Blockchain contract

use crate::block::{Block, BlockHeader, Transaction};
use super::ChainError;

/// Minimal view of a chain: its head and a way to extend it
pub trait BlockChain {
    /// Current head of the chain
    fn best_block(&self) -> &Block;

    /// Assemble a child of `parent` holding the given transactions and uncles
    ///
    /// Absent lists are treated as empty. The block is not applied to the chain.
    fn create_new_block(
        &self,
        parent: &Block,
        transactions: Option<Vec<Transaction>>,
        uncles: Option<Vec<BlockHeader>>,
    ) -> Result<Block, ChainError>;
}
