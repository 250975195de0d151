//! Per-invocation interpreter state: program counter, stack, memory,
//! storage, logs, and the halt/return-data bookkeeping.

use primitives::evm_types::LogEntry;
use primitives::memory::Memory;
use primitives::stack::Stack;
use primitives::storage::Storage;

use crate::config::EvmConfig;

#[derive(Debug)]
pub struct Frame {
    pub pc: usize,
    pub stack: Stack,
    pub memory: Memory,
    pub storage: Storage,
    pub logs: Vec<LogEntry>,
    pub return_data: Option<Vec<u8>>,
    pub success: bool,
    pub halted: bool,
}

impl Frame {
    pub fn new(config: &EvmConfig) -> Self {
        Frame {
            pc: 0,
            stack: Stack::with_max_depth(config.max_stack_depth),
            memory: Memory::new(),
            storage: Storage::new(),
            logs: Vec::new(),
            return_data: None,
            success: false,
            halted: false,
        }
    }

    pub fn halt_success(&mut self, return_data: Option<Vec<u8>>) {
        self.success = true;
        self.return_data = return_data;
        self.halted = true;
    }

    pub fn halt_failure(&mut self, return_data: Option<Vec<u8>>) {
        self.success = false;
        self.return_data = return_data;
        self.halted = true;
    }
}
