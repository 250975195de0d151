//! Typed, already-decoded environment records: the transaction-like and
//! block-like inputs to a frame, plus the log entries it emits.

use alloy_primitives::{Address, U256};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub to: Address,
    pub from: Address,
    pub origin: Address,
    pub value: U256,
    pub gasprice: U256,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockEnv {
    pub coinbase: Address,
    pub timestamp: U256,
    pub number: U256,
    pub difficulty: U256,
    pub gaslimit: U256,
    pub chainid: U256,
    pub basefee: U256,
}

/// A single emitted log entry, in the order LOGn popped its topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub address: Address,
    pub topics: Vec<U256>,
    pub data: Vec<u8>,
}
