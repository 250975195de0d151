//! Primitive data structures shared by the interpreter: stack, memory,
//! per-frame storage, world state, and the typed environment records.

pub mod errors;
pub mod evm_types;
pub mod hexutil;
pub mod memory;
pub mod raw;
pub mod stack;
pub mod storage;
pub mod world_state;
