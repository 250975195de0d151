//! Hex decoding helpers for the wire-format environment records.
//!
//! All scalar fields arrive `0x`-prefixed; `tx.data` and `code.bin` arrive
//! unprefixed. Absent/empty fields decode to the type's zero value rather
//! than erroring, matching the "sparse, defaults to 0/empty" reading of the
//! environment records.

use alloy_primitives::{Address, U256};
use std::str::FromStr;

use crate::errors::EvmError;

fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

pub fn parse_address(field: &'static str, s: &str) -> Result<Address, EvmError> {
    if s.is_empty() {
        return Ok(Address::ZERO);
    }
    Address::from_str(s).map_err(|_| EvmError::MalformedHex { field })
}

pub fn parse_u256(field: &'static str, s: &str) -> Result<U256, EvmError> {
    let trimmed = strip_0x(s);
    if trimmed.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(trimmed, 16).map_err(|_| EvmError::MalformedHex { field })
}

/// Decode an unprefixed hex byte string (`tx.data`, `code.bin`).
pub fn parse_hex_bytes(field: &'static str, s: &str) -> Result<Vec<u8>, EvmError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    alloy_primitives::hex::decode(strip_0x(s)).map_err(|_| EvmError::MalformedHex { field })
}

/// Encode bytes as a lowercase hex string, two digits per byte, no `0x` prefix.
pub fn to_hex_bytes(bytes: &[u8]) -> String {
    alloy_primitives::hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_u256_accepts_0x_prefix() {
        assert_eq!(
            parse_u256("value", "0xff").unwrap(),
            U256::from(255)
        );
    }

    #[test]
    fn parse_u256_empty_defaults_to_zero() {
        assert_eq!(parse_u256("value", "").unwrap(), U256::ZERO);
    }

    #[test]
    fn parse_address_rejects_garbage() {
        assert!(parse_address("to", "not-an-address").is_err());
    }

    #[test]
    fn hex_bytes_roundtrip_two_digits_per_byte() {
        let bytes = vec![0x00u8, 0x0f, 0xff];
        let hex = to_hex_bytes(&bytes);
        assert_eq!(hex, "000fff");
        assert_eq!(parse_hex_bytes("data", &hex).unwrap(), bytes);
    }
}
