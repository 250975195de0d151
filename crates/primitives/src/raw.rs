//! Wire-format environment records (`serde`-deserialized from the JSON the
//! external test corpus / CLI supplies) and their conversion into the typed
//! records the interpreter actually works with.

use std::collections::HashMap;

use serde::Deserialize;

use crate::errors::EvmError;
use crate::evm_types::{BlockEnv, Transaction};
use crate::hexutil::{parse_address, parse_hex_bytes, parse_u256};
use crate::world_state::{Account, WorldState};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TxRecord {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub gasprice: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

impl TryFrom<TxRecord> for Transaction {
    type Error = EvmError;

    fn try_from(raw: TxRecord) -> Result<Self, Self::Error> {
        Ok(Transaction {
            to: parse_address("tx.to", raw.to.as_deref().unwrap_or(""))?,
            from: parse_address("tx.from", raw.from.as_deref().unwrap_or(""))?,
            origin: parse_address("tx.origin", raw.origin.as_deref().unwrap_or(""))?,
            value: parse_u256("tx.value", raw.value.as_deref().unwrap_or(""))?,
            gasprice: parse_u256("tx.gasprice", raw.gasprice.as_deref().unwrap_or(""))?,
            data: parse_hex_bytes("tx.data", raw.data.as_deref().unwrap_or(""))?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockRecord {
    #[serde(default)]
    pub coinbase: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub gaslimit: Option<String>,
    #[serde(default)]
    pub chainid: Option<String>,
    #[serde(default)]
    pub basefee: Option<String>,
}

impl TryFrom<BlockRecord> for BlockEnv {
    type Error = EvmError;

    fn try_from(raw: BlockRecord) -> Result<Self, Self::Error> {
        Ok(BlockEnv {
            coinbase: parse_address("block.coinbase", raw.coinbase.as_deref().unwrap_or(""))?,
            timestamp: parse_u256("block.timestamp", raw.timestamp.as_deref().unwrap_or(""))?,
            number: parse_u256("block.number", raw.number.as_deref().unwrap_or(""))?,
            difficulty: parse_u256("block.difficulty", raw.difficulty.as_deref().unwrap_or(""))?,
            gaslimit: parse_u256("block.gaslimit", raw.gaslimit.as_deref().unwrap_or(""))?,
            chainid: parse_u256("block.chainid", raw.chainid.as_deref().unwrap_or(""))?,
            basefee: parse_u256("block.basefee", raw.basefee.as_deref().unwrap_or(""))?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeRecord {
    #[serde(default)]
    pub bin: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountRecord {
    #[serde(default)]
    pub balance: Option<String>,
    #[serde(default)]
    pub code: Option<CodeRecord>,
}

/// `state: address (0x-prefixed, 42 chars) -> account record`.
pub type StateRecord = HashMap<String, AccountRecord>;

pub fn world_state_from_record(raw: StateRecord) -> Result<WorldState, EvmError> {
    let mut state = WorldState::new();
    for (addr, account) in raw {
        let address = parse_address("state.<address>", &addr)?;
        let balance = parse_u256(
            "state.<address>.balance",
            account.balance.as_deref().unwrap_or(""),
        )?;
        let code = parse_hex_bytes(
            "state.<address>.code.bin",
            account.code.and_then(|c| c.bin).as_deref().unwrap_or(""),
        )?;
        state.insert(address, Account { balance, code });
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_record_with_missing_fields_defaults_to_zero() {
        let tx: Transaction = TxRecord::default().try_into().unwrap();
        assert_eq!(tx, Transaction::default());
    }

    #[test]
    fn state_record_decodes_balance_and_code() {
        let mut raw: StateRecord = HashMap::new();
        raw.insert(
            "0x0000000000000000000000000000000000000001".to_string(),
            AccountRecord {
                balance: Some("0x2a".to_string()),
                code: Some(CodeRecord {
                    bin: Some("6001".to_string()),
                }),
            },
        );
        let state = world_state_from_record(raw).unwrap();
        let addr = parse_address("t", "0x0000000000000000000000000000000000000001").unwrap();
        assert_eq!(state.balance_of(&addr), alloy_primitives::U256::from(42));
        assert_eq!(state.code_of(&addr), &[0x60, 0x01]);
    }
}
