//! SA Blockchain Node
//!
//! Loads a genesis document and reports the resulting genesis block.
//! Usage: `sa-node [genesis.json]`

use sa_core::chain::{BlockChain, ChainState};
use sa_core::constants::DEFAULT_GENESIS_PATH;
use sa_core::crypto::{EMPTY_LIST_HASH, EMPTY_TRIE_HASH};
use sa_core::node::{load_genesis_from_path, GenesisInfo};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_GENESIS_PATH.to_string());
    info!(%path, "loading genesis");

    info!(empty_list_hash = %*EMPTY_LIST_HASH, empty_trie_hash = %*EMPTY_TRIE_HASH, "hash constants");

    let genesis = load_genesis_from_path(&path)?;
    let genesis_info = GenesisInfo::new(&genesis);
    info!(
        hash = %genesis_info.hash,
        number = genesis_info.number,
        state_root = %genesis_info.state_root,
        timestamp = genesis_info.timestamp,
        gas_limit = genesis_info.gas_limit,
        accounts = genesis_info.allocated_accounts,
        "genesis block"
    );

    let state = ChainState::new(genesis.into_block());
    let best = state.best_block();
    info!(height = state.height, tip = %state.tip_hash, encoded_len = best.encode().len(), "chain ready");

    Ok(())
}
