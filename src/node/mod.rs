//! Node module - genesis document loading

mod genesis;

pub use genesis::*;
