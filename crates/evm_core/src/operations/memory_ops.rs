//! Volatile memory opcodes and SHA3 (which reads memory but hashes, rather
//! than mutates, its input).

use alloy_primitives::{keccak256, U256};
use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;

fn as_offset(value: U256) -> usize {
    value.as_limbs()[0] as usize
}

pub fn mload(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = as_offset(frame.stack.pop()?);
    let word = frame.memory.load_word(offset);
    frame.stack.push(word)
}

pub fn mstore(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = as_offset(frame.stack.pop()?);
    let value = frame.stack.pop()?;
    frame.memory.store_word(offset, value);
    Ok(())
}

pub fn mstore8(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = as_offset(frame.stack.pop()?);
    let value = frame.stack.pop()?;
    frame.memory.store_byte(offset, value.as_limbs()[0] as u8);
    Ok(())
}

pub fn msize(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(U256::from(frame.memory.size_words() as u64))
}

/// MCOPY: stack order is `dest, src, len` (dest on top).
pub fn mcopy(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let dest = as_offset(frame.stack.pop()?);
    let src = as_offset(frame.stack.pop()?);
    let len = as_offset(frame.stack.pop()?);
    frame.memory.copy_within_self(dest, src, len);
    Ok(())
}

pub fn sha3(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = as_offset(frame.stack.pop()?);
    let size = as_offset(frame.stack.pop()?);
    let bytes = frame.memory.load_range(offset, size);
    let hash = keccak256(&bytes);
    frame.stack.push(U256::from_be_bytes(hash.0))
}
