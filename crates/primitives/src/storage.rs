//! Per-frame persistent storage: a word-keyed map, default 0 for absent keys.
//! Lives for the duration of one frame; not carried across top-level invocations.

use std::collections::HashMap;

use alloy_primitives::U256;

#[derive(Debug, Clone, Default)]
pub struct Storage {
    data: HashMap<U256, U256>,
}

impl Storage {
    pub fn new() -> Self {
        Storage {
            data: HashMap::new(),
        }
    }

    pub fn sload(&self, key: U256) -> U256 {
        self.data.get(&key).copied().unwrap_or(U256::ZERO)
    }

    pub fn sstore(&mut self, key: U256, value: U256) {
        self.data.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_defaults_to_zero() {
        let storage = Storage::new();
        assert_eq!(storage.sload(U256::from(7)), U256::ZERO);
    }

    #[test]
    fn sstore_then_sload_roundtrips() {
        let mut storage = Storage::new();
        storage.sstore(U256::from(1), U256::from(42));
        assert_eq!(storage.sload(U256::from(1)), U256::from(42));
    }
}
