use thiserror::Error;

/// Faults raised by the primitive data structures and environment adapters.
///
/// None of these cross the public `evm_core::execute` boundary as a `Result`:
/// the dispatcher catches them per-opcode and folds them into `success = false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvmError {
    #[error("stack underflow")]
    StackUnderflow,
    #[error("stack overflow: depth would exceed {max}")]
    StackOverflow { max: usize },
    #[error("invalid jump destination: pc={pc}")]
    InvalidJump { pc: usize },
    #[error("invalid opcode: 0x{opcode:02x}")]
    InvalidOpcode { opcode: u8 },
    #[error("malformed hex in field `{field}`")]
    MalformedHex { field: &'static str },
    #[error("call depth exceeded")]
    CallDepthExceeded,
}
