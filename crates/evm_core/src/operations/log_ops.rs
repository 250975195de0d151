//! LOG0..LOG4: append-only event emission. Stack order is
//! `offset, size, topic_n, ..., topic_1` with `offset` on top; topics are
//! popped top-first and stored in that same top-first order.

use primitives::errors::EvmError;
use primitives::evm_types::LogEntry;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;
use crate::opcodes::log_n;

pub fn log(frame: &mut Frame, _code: &Code, ctx: &ExecContext, opcode: u8) -> Result<(), EvmError> {
    let topic_count = log_n(opcode).expect("log() only dispatched for LOG0..LOG4") as usize;

    let offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let size = frame.stack.pop()?.as_limbs()[0] as usize;

    let mut topics = Vec::with_capacity(topic_count);
    for _ in 0..topic_count {
        topics.push(frame.stack.pop()?);
    }

    let data = frame.memory.load_range(offset, size);
    frame.logs.push(LogEntry {
        address: ctx.tx.to,
        topics,
        data,
    });
    Ok(())
}
