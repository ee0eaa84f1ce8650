//! Block module - header info, headers, blocks and transaction carriers

mod block;
mod header;
mod header_info;
mod transaction;

pub use block::*;
pub use header::*;
pub use header_info::*;
pub use transaction::*;
