//! The fetch-decode-execute loop and the byte -> handler jump table it reads.
//!
//! Convention: the dispatcher increments `pc` immediately after fetching the
//! opcode byte, *before* calling the handler. A handler that reads `pc`
//! (PC, PUSH) therefore sees it already pointing one past its own opcode -
//! PUSH uses that to find its immediate, and PC subtracts one back off to
//! report the position of the opcode it belongs to.

use primitives::errors::EvmError;

use crate::code::Code;
use crate::context::ExecContext;
use crate::frame::Frame;
use crate::opcodes::{dup_n, log_n, push_len, swap_n, Opcode};
use crate::operations::{ariths, call_ops, control_ops, env_ops, log_ops, memory_ops, stack_ops, storage_ops};

pub type OpcodeFn = fn(&mut Frame, &Code, &ExecContext, u8) -> Result<(), EvmError>;

/// Build the 256-entry dispatch table. Bytes with no assigned opcode default
/// to [`control_ops::invalid`], which halts the frame as a failure rather
/// than silently doing nothing.
pub fn build_jump_table() -> [OpcodeFn; 256] {
    let mut table: [OpcodeFn; 256] = [control_ops::invalid; 256];

    table[Opcode::STOP as usize] = control_ops::stop;
    table[Opcode::ADD as usize] = ariths::add;
    table[Opcode::MUL as usize] = ariths::mul;
    table[Opcode::SUB as usize] = ariths::sub;
    table[Opcode::DIV as usize] = ariths::div;
    table[Opcode::SDIV as usize] = ariths::sdiv;
    table[Opcode::MOD as usize] = ariths::modulo;
    table[Opcode::SMOD as usize] = ariths::smod;
    table[Opcode::ADDMOD as usize] = ariths::addmod;
    table[Opcode::MULMOD as usize] = ariths::mulmod;
    table[Opcode::EXP as usize] = ariths::exp;
    table[Opcode::SIGNEXTEND as usize] = ariths::signextend;

    table[Opcode::LT as usize] = ariths::lt;
    table[Opcode::GT as usize] = ariths::gt;
    table[Opcode::SLT as usize] = ariths::slt;
    table[Opcode::SGT as usize] = ariths::sgt;
    table[Opcode::EQ as usize] = ariths::eq;
    table[Opcode::ISZERO as usize] = ariths::is_zero;
    table[Opcode::AND as usize] = ariths::and;
    table[Opcode::OR as usize] = ariths::or;
    table[Opcode::XOR as usize] = ariths::xor;
    table[Opcode::NOT as usize] = ariths::not;
    table[Opcode::BYTE as usize] = ariths::byte;
    table[Opcode::SHL as usize] = ariths::shl;
    table[Opcode::SHR as usize] = ariths::shr;
    table[Opcode::SAR as usize] = ariths::sar;

    table[Opcode::SHA3 as usize] = memory_ops::sha3;

    table[Opcode::ADDRESS as usize] = env_ops::address;
    table[Opcode::BALANCE as usize] = env_ops::balance;
    table[Opcode::ORIGIN as usize] = env_ops::origin;
    table[Opcode::CALLER as usize] = env_ops::caller;
    table[Opcode::CALLVALUE as usize] = env_ops::callvalue;
    table[Opcode::CALLDATALOAD as usize] = env_ops::calldataload;
    table[Opcode::CALLDATASIZE as usize] = env_ops::calldatasize;
    table[Opcode::CALLDATACOPY as usize] = env_ops::calldatacopy;
    table[Opcode::CODESIZE as usize] = env_ops::codesize;
    table[Opcode::CODECOPY as usize] = env_ops::codecopy;
    table[Opcode::GASPRICE as usize] = env_ops::gasprice;
    table[Opcode::EXTCODESIZE as usize] = env_ops::extcodesize;
    table[Opcode::EXTCODECOPY as usize] = env_ops::extcodecopy;
    table[Opcode::EXTCODEHASH as usize] = env_ops::extcodehash;

    table[Opcode::BLOCKHASH as usize] = env_ops::blockhash;
    table[Opcode::COINBASE as usize] = env_ops::coinbase;
    table[Opcode::TIMESTAMP as usize] = env_ops::timestamp;
    table[Opcode::NUMBER as usize] = env_ops::number;
    table[Opcode::DIFFICULTY as usize] = env_ops::difficulty;
    table[Opcode::GASLIMIT as usize] = env_ops::gaslimit;
    table[Opcode::CHAINID as usize] = env_ops::chainid;
    table[Opcode::SELFBALANCE as usize] = env_ops::selfbalance;
    table[Opcode::BASEFEE as usize] = env_ops::basefee;

    table[Opcode::POP as usize] = stack_ops::pop;
    table[Opcode::MLOAD as usize] = memory_ops::mload;
    table[Opcode::MSTORE as usize] = memory_ops::mstore;
    table[Opcode::MSTORE8 as usize] = memory_ops::mstore8;
    table[Opcode::SLOAD as usize] = storage_ops::sload;
    table[Opcode::SSTORE as usize] = storage_ops::sstore;
    table[Opcode::JUMP as usize] = control_ops::jump;
    table[Opcode::JUMPI as usize] = control_ops::jumpi;
    table[Opcode::PC as usize] = stack_ops::pc;
    table[Opcode::MSIZE as usize] = memory_ops::msize;
    table[Opcode::GAS as usize] = stack_ops::gas;
    table[Opcode::JUMPDEST as usize] = control_ops::jumpdest;
    table[Opcode::MCOPY as usize] = memory_ops::mcopy;

    table[Opcode::PUSH0 as usize] = stack_ops::push;
    for byte in Opcode::PUSH1 as usize..=Opcode::PUSH32 as usize {
        debug_assert!(push_len(byte as u8).is_some());
        table[byte] = stack_ops::push;
    }

    for byte in Opcode::DUP1 as usize..=Opcode::DUP16 as usize {
        debug_assert!(dup_n(byte as u8).is_some());
        table[byte] = stack_ops::dup;
    }

    for byte in Opcode::SWAP1 as usize..=Opcode::SWAP16 as usize {
        debug_assert!(swap_n(byte as u8).is_some());
        table[byte] = stack_ops::swap;
    }

    for byte in Opcode::LOG0 as usize..=Opcode::LOG4 as usize {
        debug_assert!(log_n(byte as u8).is_some());
        table[byte] = log_ops::log;
    }

    table[Opcode::CALL as usize] = call_ops::call;
    table[Opcode::RETURN as usize] = control_ops::ret;
    table[Opcode::REVERT as usize] = control_ops::revert;

    table
}

/// Run `code` to completion against `ctx`, returning the frame's final state.
///
/// Halts when a handler sets `frame.halted` (STOP/RETURN/REVERT/invalid
/// opcode/invalid jump/stack fault), or when `pc` runs off the end of the
/// code - which per the data model's invariants is a successful halt with
/// no return data, not an error.
pub fn run(code: &Code<'_>, ctx: ExecContext<'_>) -> Frame {
    let table = build_jump_table();
    let mut frame = Frame::new(ctx.config);

    loop {
        let Some(opcode) = code.get(frame.pc) else {
            frame.halt_success(None);
            break;
        };

        log::trace!("pc={} opcode=0x{:02x}", frame.pc, opcode);
        frame.pc += 1;

        let handler = table[opcode as usize];
        if let Err(err) = handler(&mut frame, code, &ctx, opcode) {
            log::debug!("frame fault at pc={}: {}", frame.pc - 1, err);
            frame.halt_failure(None);
        }

        if frame.halted {
            break;
        }
    }

    frame
}
