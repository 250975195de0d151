//! CALL: recurse into a child frame against the callee's code, then splice
//! its outcome (return data, logs, success flag) back into the caller.

use alloy_primitives::{Address, U256};
use primitives::errors::EvmError;
use primitives::evm_types::Transaction;

use crate::code::Code;
use crate::context::ExecContext;
use crate::dispatch;
use crate::frame::Frame;

fn word_to_address(value: U256) -> Address {
    let bytes = value.to_be_bytes::<32>();
    Address::from_slice(&bytes[12..])
}

/// CALL: stack order (top to bottom) `gas, to, value, argsOffset, argsSize,
/// retOffset, retSize`. `gas` is popped and discarded since this
/// interpreter does no gas accounting.
///
/// If `ctx.config.max_call_depth` would be exceeded, pushes 0 (failure)
/// without recursing, failing closed instead of overflowing the native call
/// stack on adversarially deep call chains.
pub fn call(frame: &mut Frame, _code: &Code, ctx: &ExecContext, _opcode: u8) -> Result<(), EvmError> {
    let _gas = frame.stack.pop()?;
    let to = word_to_address(frame.stack.pop()?);
    let value = frame.stack.pop()?;
    let args_offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let args_size = frame.stack.pop()?.as_limbs()[0] as usize;
    let ret_offset = frame.stack.pop()?.as_limbs()[0] as usize;
    let ret_size = frame.stack.pop()?.as_limbs()[0] as usize;

    if ctx.depth + 1 >= ctx.config.max_call_depth {
        return frame.stack.push(U256::ZERO);
    }

    let call_data = frame.memory.load_range(args_offset, args_size);
    let code_bytes = ctx.state.code_of(&to).to_vec();

    let child_tx = Transaction {
        to,
        from: ctx.tx.to,
        origin: ctx.tx.origin,
        value,
        gasprice: ctx.tx.gasprice,
        data: call_data,
    };
    let child_ctx = ctx.child(child_tx);
    let child_code = Code::new(&code_bytes);
    let child_frame = dispatch::run(&child_code, child_ctx);

    let returned = child_frame.return_data.unwrap_or_default();
    let copy_len = returned.len().min(ret_size);
    let mut padded = vec![0u8; ret_size];
    padded[..copy_len].copy_from_slice(&returned[..copy_len]);
    frame.memory.store_bytes(ret_offset, &padded);

    frame.logs.extend(child_frame.logs);

    frame.stack.push(if child_frame.success { U256::from(1u8) } else { U256::ZERO })
}
