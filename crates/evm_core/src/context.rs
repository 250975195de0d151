//! The read-only inputs threaded through one frame's execution: the
//! transaction-like record (owned, since CALL derives a fresh one per child
//! frame), plus the block and world-state records, which are shared
//! unchanged across the whole call chain.

use primitives::evm_types::{BlockEnv, Transaction};
use primitives::world_state::WorldState;

use crate::config::EvmConfig;

pub struct ExecContext<'a> {
    pub tx: Transaction,
    pub block: &'a BlockEnv,
    pub state: &'a WorldState,
    pub config: &'a EvmConfig,
    pub depth: usize,
}

impl<'a> ExecContext<'a> {
    pub fn top_level(tx: Transaction, block: &'a BlockEnv, state: &'a WorldState, config: &'a EvmConfig) -> Self {
        ExecContext {
            tx,
            block,
            state,
            config,
            depth: 0,
        }
    }

    /// Build the context for a CALL's child frame: same block/state/config,
    /// one level deeper, with a derived transaction record.
    pub fn child(&self, tx: Transaction) -> Self {
        ExecContext {
            tx,
            block: self.block,
            state: self.state,
            config: self.config,
            depth: self.depth + 1,
        }
    }
}
