//! Header fields parsed from a genesis document
//!
//! Every string setter validates its field width before storing the bytes.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::constants::{
    ADDRESS_LENGTH, HASH_LENGTH, MAX_DIFFICULTY_LENGTH, MAX_EXTRA_DATA_LENGTH, U64_LENGTH,
};
use crate::node::AllocatedAccount;
use crate::utils::{bytes_to_u64, hex_to_bytes, hex_to_bytes_checked, ByteError};

/// Length of the proof-of-work nonce in bytes
pub const NONCE_LENGTH: usize = 8;

/// Header field validation errors
#[derive(Debug, Error, PartialEq)]
pub enum HeaderError {
    #[error(transparent)]
    Bytes(#[from] ByteError),
    #[error("Invalid nonce, should be {} bytes, got {length}", NONCE_LENGTH)]
    InvalidNonce { length: usize },
}

/// Mutable record of header values used to build a block header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockHeaderInfo {
    alloc: BTreeMap<String, AllocatedAccount>,
    mixhash: Vec<u8>,
    coinbase: Vec<u8>,
    timestamp: u64,
    parent_hash: Vec<u8>,
    extra_data: Vec<u8>,
    gas_limit: u64,
    nonce: [u8; NONCE_LENGTH],
    difficulty: Vec<u8>,
    logs_bloom: Vec<u8>,
    uncles_hash: Vec<u8>,
    number: u64,
    gas_used: u64,
}

impl BlockHeaderInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mix hash, exactly 32 bytes
    pub fn set_mixhash(&mut self, mixhash: &str) -> Result<(), HeaderError> {
        self.mixhash = hex_to_bytes_checked(mixhash, HASH_LENGTH, false)?;
        Ok(())
    }

    /// Beneficiary address, exactly 20 bytes
    pub fn set_coinbase(&mut self, coinbase: &str) -> Result<(), HeaderError> {
        self.coinbase = hex_to_bytes_checked(coinbase, ADDRESS_LENGTH, false)?;
        Ok(())
    }

    /// Timestamp, exactly 8 big-endian bytes
    pub fn set_timestamp(&mut self, timestamp: &str) -> Result<(), HeaderError> {
        let bytes = hex_to_bytes_checked(timestamp, U64_LENGTH, false)?;
        self.timestamp = bytes_to_u64(&bytes);
        Ok(())
    }

    /// Extra data, at most 32 bytes
    pub fn set_extra_data(&mut self, extra_data: &str) -> Result<(), HeaderError> {
        self.extra_data = hex_to_bytes_checked(extra_data, MAX_EXTRA_DATA_LENGTH, true)?;
        Ok(())
    }

    /// Gas limit, at most 8 big-endian bytes (empty is zero)
    pub fn set_gas_limit(&mut self, gas_limit: &str) -> Result<(), HeaderError> {
        let bytes = hex_to_bytes_checked(gas_limit, U64_LENGTH, true)?;
        self.gas_limit = bytes_to_u64(&bytes);
        Ok(())
    }

    /// Nonce of at most 8 bytes, left-padded with zeros to exactly 8
    pub fn set_nonce(&mut self, nonce: &str) -> Result<(), HeaderError> {
        let bytes = hex_to_bytes(nonce)?;
        if bytes.len() > NONCE_LENGTH {
            return Err(HeaderError::InvalidNonce { length: bytes.len() });
        }

        let mut padded = [0u8; NONCE_LENGTH];
        padded[NONCE_LENGTH - bytes.len()..].copy_from_slice(&bytes);
        self.nonce = padded;
        Ok(())
    }

    /// Difficulty, at most 32 bytes
    pub fn set_difficulty(&mut self, difficulty: &str) -> Result<(), HeaderError> {
        self.difficulty = hex_to_bytes_checked(difficulty, MAX_DIFFICULTY_LENGTH, true)?;
        Ok(())
    }

    /// Parent block hash, exactly 32 bytes
    pub fn set_parent_hash(&mut self, parent_hash: &str) -> Result<(), HeaderError> {
        self.parent_hash = hex_to_bytes_checked(parent_hash, HASH_LENGTH, false)?;
        Ok(())
    }

    /// Uncles hash, stored as given
    ///
    /// Unlike the other hash fields the width is not checked here: genesis
    /// loading injects the computed empty-list hash directly.
    pub fn set_uncles_hash(&mut self, uncles_hash: Vec<u8>) {
        self.uncles_hash = uncles_hash;
    }

    pub fn set_logs_bloom(&mut self, logs_bloom: Vec<u8>) {
        self.logs_bloom = logs_bloom;
    }

    pub fn set_alloc(&mut self, alloc: BTreeMap<String, AllocatedAccount>) {
        self.alloc = alloc;
    }

    pub fn set_number(&mut self, number: u64) {
        self.number = number;
    }

    pub fn set_gas_used(&mut self, gas_used: u64) {
        self.gas_used = gas_used;
    }

    pub(crate) fn set_parent_hash_bytes(&mut self, parent_hash: Vec<u8>) {
        self.parent_hash = parent_hash;
    }

    pub(crate) fn set_timestamp_value(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    pub fn alloc(&self) -> &BTreeMap<String, AllocatedAccount> {
        &self.alloc
    }

    pub fn mixhash(&self) -> &[u8] {
        &self.mixhash
    }

    pub fn coinbase(&self) -> &[u8] {
        &self.coinbase
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn parent_hash(&self) -> &[u8] {
        &self.parent_hash
    }

    pub fn extra_data(&self) -> &[u8] {
        &self.extra_data
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn nonce(&self) -> &[u8; NONCE_LENGTH] {
        &self.nonce
    }

    pub fn difficulty(&self) -> &[u8] {
        &self.difficulty
    }

    pub fn logs_bloom(&self) -> &[u8] {
        &self.logs_bloom
    }

    pub fn uncles_hash(&self) -> &[u8] {
        &self.uncles_hash
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }
}
