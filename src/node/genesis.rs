//! Genesis block loading
//!
//! A genesis document is a JSON object whose header fields are hex strings,
//! plus an `alloc` map of pre-funded accounts. The document is turned into a
//! validated [`BlockHeaderInfo`] and then into the genesis block.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Deref;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::block::{Block, BlockHeaderInfo, HeaderError};
use crate::crypto::{Hash, EMPTY_LIST_HASH, ZERO_HASH_2048};

/// Genesis loading errors
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("Failed to read genesis file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed genesis document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid genesis header: {0}")]
    Header(#[from] HeaderError),
}

/// Pre-funded account; contents are opaque at this layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedAccount {
    #[serde(default)]
    pub storage: BTreeMap<String, String>,
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub balance: Option<String>,
}

/// Genesis document as found on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisDocument {
    #[serde(default)]
    pub alloc: BTreeMap<String, AllocatedAccount>,
    #[serde(default)]
    pub mixhash: String,
    #[serde(default)]
    pub coinbase: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub parent_hash: String,
    #[serde(default)]
    pub extra_data: String,
    #[serde(default)]
    pub gas_limit: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(default)]
    pub difficulty: String,
}

impl GenesisDocument {
    pub fn from_json_str(json: &str) -> Result<Self, GenesisError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GenesisError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), bytes = json.len(), "read genesis document");
        Self::from_json_str(&json)
    }

    /// Run every header setter over the document fields
    ///
    /// The logs bloom starts out as the all-zero bloom.
    pub fn to_header_info(&self) -> Result<BlockHeaderInfo, GenesisError> {
        let mut info = BlockHeaderInfo::new();
        info.set_alloc(self.alloc.clone());
        info.set_mixhash(&self.mixhash)?;
        info.set_coinbase(&self.coinbase)?;
        info.set_timestamp(&self.timestamp)?;
        info.set_parent_hash(&self.parent_hash)?;
        info.set_extra_data(&self.extra_data)?;
        info.set_gas_limit(&self.gas_limit)?;
        info.set_nonce(&self.nonce)?;
        info.set_difficulty(&self.difficulty)?;
        info.set_logs_bloom(ZERO_HASH_2048.to_vec());
        Ok(info)
    }
}

/// The first block of the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genesis(Block);

impl Genesis {
    pub fn into_block(self) -> Block {
        self.0
    }
}

impl Deref for Genesis {
    type Target = Block;

    fn deref(&self) -> &Block {
        &self.0
    }
}

/// Build the genesis block from header info
///
/// The uncles hash is fixed to the empty-list hash; the block carries no
/// transactions and no uncles.
pub fn load_genesis(mut info: BlockHeaderInfo) -> Genesis {
    info.set_uncles_hash(EMPTY_LIST_HASH.to_vec());
    let genesis = Genesis(Block::new(info, None, None));
    info!(hash = %genesis.hash(), number = genesis.number(), "genesis block created");
    genesis
}

/// Parse a genesis JSON file and build the genesis block
pub fn load_genesis_from_path<P: AsRef<Path>>(path: P) -> Result<Genesis, GenesisError> {
    let document = GenesisDocument::from_path(path)?;
    Ok(load_genesis(document.to_header_info()?))
}

/// Genesis block statistics
#[derive(Debug)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub number: u64,
    pub state_root: Hash,
    pub timestamp: u64,
    pub gas_limit: u64,
    pub allocated_accounts: usize,
}

impl GenesisInfo {
    pub fn new(genesis: &Genesis) -> Self {
        let info = genesis.header.info();
        Self {
            hash: genesis.hash(),
            number: genesis.number(),
            state_root: *genesis.header.state_root(),
            timestamp: info.timestamp(),
            gas_limit: info.gas_limit(),
            allocated_accounts: info.alloc().len(),
        }
    }
}
