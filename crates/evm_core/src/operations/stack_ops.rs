//! Stack-shuffling and a few misc opcodes that read interpreter bookkeeping
//! rather than EVM state: POP, PUSHn, DUPn, SWAPn, PC, GAS.

use alloy_primitives::U256;
use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;
use crate::opcodes::{dup_n, push_len, swap_n, Opcode};

pub fn pop(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.pop().map(|_| ())
}

/// PUSH0..PUSH32: read the immediate from the code that follows the opcode
/// byte (the dispatcher has already advanced `pc` past it) and advance `pc`
/// again by the immediate's length.
pub fn push(frame: &mut Frame, code: &Code, _ctx: &ExecContext, opcode: u8) -> Result<(), EvmError> {
    if opcode == Opcode::PUSH0 as u8 {
        return frame.stack.push(U256::ZERO);
    }
    let len = push_len(opcode).expect("push() only dispatched for PUSH0..PUSH32") as usize;
    let bytes = code.read_padded(frame.pc, len);
    frame.pc += len;
    frame.stack.push(U256::from_be_slice(&bytes))
}

pub fn dup(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, opcode: u8) -> Result<(), EvmError> {
    let n = dup_n(opcode).expect("dup() only dispatched for DUP1..DUP16") as usize;
    frame.stack.dup(n)
}

pub fn swap(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, opcode: u8) -> Result<(), EvmError> {
    let n = swap_n(opcode).expect("swap() only dispatched for SWAP1..SWAP16") as usize;
    frame.stack.swap(n)
}

/// PC: the program counter of the opcode currently executing, i.e. one less
/// than the dispatcher's already-advanced `frame.pc`.
pub fn pc(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(U256::from((frame.pc - 1) as u64))
}

/// GAS: no gas accounting is modeled, so this reports an effectively
/// unlimited budget rather than a meaningless constant.
pub fn gas(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.stack.push(U256::MAX)
}
