//! The read-only world-state: a sparse map from address to account record
//! (balance, code). Absent accounts read as balance 0 / empty code.

use std::collections::HashMap;

use alloy_primitives::{keccak256, Address, U256};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub balance: U256,
    pub code: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct WorldState {
    accounts: HashMap<Address, Account>,
}

impl WorldState {
    pub fn new() -> Self {
        WorldState {
            accounts: HashMap::new(),
        }
    }

    pub fn insert(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    /// BALANCE: 0 for an account that does not appear in the state.
    pub fn balance_of(&self, address: &Address) -> U256 {
        self.accounts
            .get(address)
            .map(|a| a.balance)
            .unwrap_or(U256::ZERO)
    }

    /// EXTCODESIZE / CODESIZE source: empty slice for a missing account.
    pub fn code_of(&self, address: &Address) -> &[u8] {
        self.accounts
            .get(address)
            .map(|a| a.code.as_slice())
            .unwrap_or(&[])
    }

    /// EXTCODEHASH: 0 for a missing account, `keccak256("")` for an account
    /// present but without code, otherwise the hash of its code.
    pub fn code_hash_of(&self, address: &Address) -> U256 {
        match self.accounts.get(address) {
            None => U256::ZERO,
            Some(account) => U256::from_be_bytes(keccak256(&account.code).0),
        }
    }
}
