//! Environment-reading opcodes: the transaction, call-data, code, account
//! and block records exposed to the running frame. None of these touch the
//! stack/memory/storage except to read their sizes, and none of them can
//! fail once the operands are well-typed.

use alloy_primitives::{Address, U256};
use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;

/// Left-pad a 20-byte address into the 32-byte word the stack holds it as.
fn address_to_word(address: Address) -> U256 {
    let mut padded = [0u8; 32];
    padded[12..].copy_from_slice(address.as_slice());
    U256::from_be_bytes(padded)
}

/// Narrow a 256-bit stack value down to its low 20 bytes, per spec.md section
/// 4.4's address-normalization rule (extra high-order bytes are discarded,
/// not rejected).
fn word_to_address(value: U256) -> Address {
    let bytes = value.to_be_bytes::<32>();
    Address::from_slice(&bytes[12..])
}

pub fn address(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(address_to_word(ctx.tx.to))
}

pub fn caller(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(address_to_word(ctx.tx.from))
}

pub fn origin(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(address_to_word(ctx.tx.origin))
}

pub fn callvalue(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.tx.value)
}

pub fn gasprice(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.tx.gasprice)
}

pub fn calldatasize(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(U256::from(ctx.tx.data.len() as u64))
}

/// CALLDATALOAD: the 32-byte big-endian word starting at `offset` in
/// `tx.data`, zero-padded past the end - never an out-of-bounds panic.
pub fn calldataload(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = frame.stack.pop()?;
    let offset = offset.as_limbs()[0] as usize;
    let data = &ctx.tx.data;
    let mut word = [0u8; 32];
    if offset < data.len() {
        let available = (data.len() - offset).min(32);
        word[..available].copy_from_slice(&data[offset..offset + available]);
    }
    frame.stack.push(U256::from_be_bytes(word))
}

/// CALLDATACOPY: stack order `dest, offset, len` (dest on top).
pub fn calldatacopy(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let dest = frame.stack.pop()?.as_limbs()[0] as usize;
    let offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let len = frame.stack.pop()?.as_limbs()[0] as usize;
    let bytes = read_padded(&ctx.tx.data, offset, len);
    frame.memory.store_bytes(dest, &bytes);
    Ok(())
}

pub fn codesize(frame: &mut Frame, code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(U256::from(code.len() as u64))
}

/// CODECOPY: stack order `dest, offset, len` (dest on top).
pub fn codecopy(frame: &mut Frame, code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let dest = frame.stack.pop()?.as_limbs()[0] as usize;
    let offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let len = frame.stack.pop()?.as_limbs()[0] as usize;
    let bytes = code.read_padded(offset, len);
    frame.memory.store_bytes(dest, &bytes);
    Ok(())
}

pub fn balance(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let addr_word = frame.stack.pop()?;
    let address = word_to_address(addr_word);
    frame.stack.push(ctx.state.balance_of(&address))
}

pub fn selfbalance(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.state.balance_of(&ctx.tx.to))
}

pub fn extcodesize(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let addr_word = frame.stack.pop()?;
    let address = word_to_address(addr_word);
    frame.stack.push(U256::from(ctx.state.code_of(&address).len() as u64))
}

/// EXTCODECOPY: stack order `address, dest, offset, len` (address on top).
pub fn extcodecopy(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let addr_word = frame.stack.pop()?;
    let dest = frame.stack.pop()?.as_limbs()[0] as usize;
    let offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let len = frame.stack.pop()?.as_limbs()[0] as usize;
    let address = word_to_address(addr_word);
    let bytes = read_padded(ctx.state.code_of(&address), offset, len);
    frame.memory.store_bytes(dest, &bytes);
    Ok(())
}

/// EXTCODEHASH: 0 for a missing account, `keccak256("")` for a present but
/// codeless account, else the hash of its code. See SPEC_FULL.md section 4.10.
pub fn extcodehash(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let addr_word = frame.stack.pop()?;
    let address = word_to_address(addr_word);
    frame.stack.push(ctx.state.code_hash_of(&address))
}

/// BLOCKHASH: no historical block hashes are modeled, so this always reads 0
/// rather than fabricating one (see SPEC_FULL.md section 4.10).
pub fn blockhash(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let _block_number = frame.stack.pop()?;
    frame.stack.push(U256::ZERO)
}

pub fn coinbase(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(address_to_word(ctx.block.coinbase))
}

pub fn timestamp(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.block.timestamp)
}

pub fn number(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.block.number)
}

pub fn difficulty(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.block.difficulty)
}

pub fn gaslimit(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.block.gaslimit)
}

pub fn chainid(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.block.chainid)
}

pub fn basefee(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(ctx.block.basefee)
}

fn read_padded(source: &[u8], offset: usize, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    if offset >= source.len() {
        return out;
    }
    let available = (source.len() - offset).min(len);
    out[..available].copy_from_slice(&source[offset..offset + available]);
    out
}
