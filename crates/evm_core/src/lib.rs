//! Single-frame EVM bytecode interpreter: given a code buffer and the
//! surrounding transaction/block/state environment, runs it to completion
//! and reports the resulting stack, logs, and return data.

pub mod code;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod frame;
pub mod opcodes;
pub mod operations;
pub mod word;

use alloy_primitives::U256;

use primitives::evm_types::{BlockEnv, LogEntry, Transaction};
use primitives::world_state::WorldState;

use code::Code;
use config::EvmConfig;
use context::ExecContext;

/// The outcome of running one top-level frame to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub success: bool,
    /// The stack at halt, top-first.
    pub stack: Vec<U256>,
    pub logs: Vec<LogEntry>,
    pub return_data: Option<Vec<u8>>,
}

/// Run `code_bytes` against the given transaction, block and world-state
/// environment. This is the crate's single public entry point; everything
/// else here is implementation detail reached through it.
pub fn execute(
    code_bytes: &[u8],
    tx: Transaction,
    block: BlockEnv,
    state: &WorldState,
    config: &EvmConfig,
) -> ExecutionResult {
    let code = Code::new(code_bytes);
    let ctx = ExecContext::top_level(tx, &block, state, config);
    let frame = dispatch::run(&code, ctx);

    ExecutionResult {
        success: frame.success,
        stack: frame.stack.to_vec_top_first(),
        logs: frame.logs,
        return_data: frame.return_data,
    }
}
