//! Persistent per-frame key-value storage: SLOAD/SSTORE.

use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;

pub fn sload(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let key = frame.stack.pop()?;
    let value = frame.storage.sload(key);
    frame.stack.push(value)
}

pub fn sstore(frame: &mut Frame, _code: &Code, _ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let key = frame.stack.pop()?;
    let value = frame.stack.pop()?;
    frame.storage.sstore(key, value);
    Ok(())
}
