//! Control flow and termination: STOP, JUMP/JUMPI/JUMPDEST, RETURN/REVERT,
//! and the handler the dispatcher installs for unassigned opcode bytes.

use alloy_primitives::U256;
use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;

pub fn stop(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    frame.halt_success(None);
    Ok(())
}

/// A target outside `usize` range can never address real code, so it is
/// treated the same as any other out-of-bounds jump target.
fn target_as_usize(value: U256) -> Option<usize> {
    if value > U256::from(usize::MAX as u64) {
        None
    } else {
        Some(value.as_limbs()[0] as usize)
    }
}

/// JUMP: pop the target. A target that is not a valid JUMPDEST halts the
/// frame as a failure directly rather than propagating an `Err` up through
/// the dispatcher.
pub fn jump(frame: &mut Frame, code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let target = frame.stack.pop()?;
    match target_as_usize(target) {
        Some(t) if code.is_valid_jumpdest(t) => frame.pc = t,
        _ => frame.halt_failure(None),
    }
    Ok(())
}

/// JUMPI: pop target then condition; jump only if condition is nonzero.
pub fn jumpi(frame: &mut Frame, code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let target = frame.stack.pop()?;
    let condition = frame.stack.pop()?;
    if condition.is_zero() {
        return Ok(());
    }
    match target_as_usize(target) {
        Some(t) if code.is_valid_jumpdest(t) => frame.pc = t,
        _ => frame.halt_failure(None),
    }
    Ok(())
}

pub fn jumpdest(_frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    Ok(())
}

/// RETURN: pop `offset, size`, halt successfully with that memory range as
/// return data.
pub fn ret(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let size = frame.stack.pop()?.as_limbs()[0] as usize;
    let data = frame.memory.load_range(offset, size);
    frame.halt_success(Some(data));
    Ok(())
}

/// REVERT: same memory-range semantics as RETURN, but halts as a failure.
pub fn revert(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let size = frame.stack.pop()?.as_limbs()[0] as usize;
    let data = frame.memory.load_range(offset, size);
    frame.halt_failure(Some(data));
    Ok(())
}

/// Installed for every byte the opcode table does not assign: halts the
/// frame as a failure per spec.md section 4.6's "Unknown opcode" rule,
/// rather than the teacher's silent no-op default.
pub fn invalid(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, opcode: u8) -> Result<(), EvmError> {
    log::debug!("{}", EvmError::InvalidOpcode { opcode });
    frame.halt_failure(None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvmConfig;
    use crate::opcodes::Opcode;
    use alloy_primitives::U256;
    use primitives::evm_types::{BlockEnv, Transaction};
    use primitives::world_state::WorldState;

    fn ctx<'a>(tx: &'a Transaction, block: &'a BlockEnv, state: &'a WorldState, config: &'a EvmConfig) -> ExecContext<'a> {
        ExecContext::top_level(tx.clone(), block, state, config)
    }

    #[test]
    fn jump_to_jumpdest_moves_pc() {
        let config = EvmConfig::default();
        let mut frame = Frame::new(&config);
        let bytes = [Opcode::JUMP as u8, Opcode::JUMPDEST as u8];
        let code = Code::new(&bytes);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let c = ctx(&tx, &block, &state, &config);

        frame.stack.push(U256::from(1u8)).unwrap();
        jump(&mut frame, &code, &c, Opcode::JUMP as u8).unwrap();
        assert_eq!(frame.pc, 1);
        assert!(!frame.halted);
    }

    #[test]
    fn jump_to_invalid_target_halts_as_failure() {
        let config = EvmConfig::default();
        let mut frame = Frame::new(&config);
        let bytes = [Opcode::JUMP as u8, Opcode::ADD as u8];
        let code = Code::new(&bytes);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let c = ctx(&tx, &block, &state, &config);

        frame.stack.push(U256::from(1u8)).unwrap();
        jump(&mut frame, &code, &c, Opcode::JUMP as u8).unwrap();
        assert!(frame.halted);
        assert!(!frame.success);
    }

    #[test]
    fn return_halts_successfully_with_memory_slice() {
        let config = EvmConfig::default();
        let mut frame = Frame::new(&config);
        let code = Code::new(&[]);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let c = ctx(&tx, &block, &state, &config);

        frame.memory.store_bytes(0, &[0xde, 0xad]);
        frame.stack.push(U256::from(2u8)).unwrap(); // size
        frame.stack.push(U256::ZERO).unwrap(); // offset
        ret(&mut frame, &code, &c, Opcode::RETURN as u8).unwrap();
        assert!(frame.halted);
        assert!(frame.success);
        assert_eq!(frame.return_data, Some(vec![0xde, 0xad]));
    }

    #[test]
    fn invalid_opcode_halts_as_failure() {
        let config = EvmConfig::default();
        let mut frame = Frame::new(&config);
        let code = Code::new(&[]);
        let tx = Transaction::default();
        let block = BlockEnv::default();
        let state = WorldState::default();
        let c = ctx(&tx, &block, &state, &config);

        invalid(&mut frame, &code, &c, 0x0c).unwrap();
        assert!(frame.halted);
        assert!(!frame.success);
    }
}
