//! Chain module - blockchain contract and in-memory chain state

mod blockchain;
mod state;

pub use blockchain::*;
pub use state::*;
