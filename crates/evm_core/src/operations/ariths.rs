//! Arithmetic, comparison and bitwise opcode handlers. All the modular and
//! signed-word math lives in [`crate::word`]; these just pop operands off
//! the stack, call into it, and push the result back.
//!
//! ref == https://www.evm.codes/

use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;
use crate::word;

pub fn add(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::add(a, b))
}

pub fn mul(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::mul(a, b))
}

pub fn sub(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::sub(a, b))
}

pub fn div(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::div(a, b))
}

pub fn sdiv(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::sdiv(a, b))
}

pub fn modulo(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::modulo(a, b))
}

pub fn smod(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::smod(a, b))
}

pub fn addmod(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    let n = frame.stack.pop()?;
    frame.stack.push(word::addmod(a, b, n))
}

pub fn mulmod(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    let n = frame.stack.pop()?;
    frame.stack.push(word::mulmod(a, b, n))
}

pub fn exp(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let base = frame.stack.pop()?;
    let exponent = frame.stack.pop()?;
    frame.stack.push(word::exp(base, exponent))
}

pub fn signextend(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let s = frame.stack.pop()?;
    let value = frame.stack.pop()?;
    frame.stack.push(word::signextend(s, value))
}

pub fn lt(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::lt(a, b))
}

pub fn gt(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::gt(a, b))
}

pub fn slt(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::slt(a, b))
}

pub fn sgt(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::sgt(a, b))
}

pub fn eq(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(word::eq(a, b))
}

pub fn is_zero(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    frame.stack.push(word::is_zero(a))
}

pub fn and(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(a & b)
}

pub fn or(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(a | b)
}

pub fn xor(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    let b = frame.stack.pop()?;
    frame.stack.push(a ^ b)
}

pub fn not(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let a = frame.stack.pop()?;
    frame.stack.push(!a)
}

pub fn byte(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let index = frame.stack.pop()?;
    let value = frame.stack.pop()?;
    frame.stack.push(word::byte(index, value))
}

pub fn shl(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let shift = frame.stack.pop()?;
    let value = frame.stack.pop()?;
    frame.stack.push(word::shl(shift, value))
}

pub fn shr(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let shift = frame.stack.pop()?;
    let value = frame.stack.pop()?;
    frame.stack.push(word::shr(shift, value))
}

pub fn sar(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let shift = frame.stack.pop()?;
    let value = frame.stack.pop()?;
    frame.stack.push(word::sar(shift, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use primitives::evm_types::{BlockEnv, Transaction};
    use primitives::world_state::WorldState;

    fn frame_with(values: &[U256]) -> Frame {
        let config = crate::config::EvmConfig::default();
        let mut frame = Frame::new(&config);
        for v in values {
            frame.stack.push(*v).unwrap();
        }
        frame
    }

    fn dummy_ctx<'a>(
        tx: &'a Transaction,
        block: &'a BlockEnv,
        state: &'a WorldState,
        config: &'a crate::config::EvmConfig,
    ) -> ExecContext<'a> {
        ExecContext::top_level(tx.clone(), block, state, config)
    }

    #[test]
    fn add_pops_two_pushes_sum() {
        let code = Code::new(&[]);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let config = crate::config::EvmConfig::default();
        let ctx = dummy_ctx(&tx, &block, &state, &config);

        let mut frame = frame_with(&[U256::from(2u8), U256::from(3u8)]);
        add(&mut frame, &code, &ctx, 0x01).unwrap();
        assert_eq!(frame.stack.pop().unwrap(), U256::from(5u8));
    }

    #[test]
    fn sub_order_matches_top_minus_next() {
        let code = Code::new(&[]);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let config = crate::config::EvmConfig::default();
        let ctx = dummy_ctx(&tx, &block, &state, &config);

        // stack [3, 5] (top=5): sub should compute top - next = 5 - 3 = 2.
        let mut frame = frame_with(&[U256::from(3u8), U256::from(5u8)]);
        sub(&mut frame, &code, &ctx, 0x03).unwrap();
        assert_eq!(frame.stack.pop().unwrap(), U256::from(2u8));
    }

    #[test]
    fn underflow_on_empty_stack_errors() {
        let code = Code::new(&[]);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let config = crate::config::EvmConfig::default();
        let ctx = dummy_ctx(&tx, &block, &state, &config);

        let mut frame = Frame::new(&config);
        assert_eq!(add(&mut frame, &code, &ctx, 0x01), Err(EvmError::StackUnderflow));
    }
}
