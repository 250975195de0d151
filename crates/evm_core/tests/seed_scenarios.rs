//! Integration tests against the public `evm_core::execute` entry point,
//! covering the canonical scenarios a single-frame interpreter must get
//! right: arithmetic wraparound, storage persistence within one frame,
//! jump validation, and the RETURN/REVERT distinction.

use alloy_primitives::{Address, U256};

use evm_core::config::EvmConfig;
use evm_core::execute;
use primitives::evm_types::{BlockEnv, Transaction};
use primitives::world_state::{Account, WorldState};

fn run(code: &[u8]) -> evm_core::ExecutionResult {
    execute(
        code,
        Transaction::default(),
        BlockEnv::default(),
        &WorldState::default(),
        &EvmConfig::default(),
    )
}

#[test]
fn push_push_add_yields_two() {
    // PUSH1 1, PUSH1 1, ADD
    let result = run(&[0x60, 0x01, 0x60, 0x01, 0x01]);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::from(2u8)]);
}

#[test]
fn sub_wraps_to_max_on_underflow() {
    // PUSH1 1, PUSH1 0, SUB -> top - next = 0 - 1 wraps to U256::MAX
    let result = run(&[0x60, 0x01, 0x60, 0x00, 0x03]);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::MAX]);
}

#[test]
fn jump_over_push_immediate_reaches_real_jumpdest() {
    // PUSH1 5, JUMP, PUSH1 0xff (dead code, skipped), JUMPDEST, PUSH1 7, STOP
    let code = [0x60, 0x05, 0x56, 0x60, 0xff, 0x5b, 0x60, 0x07, 0x00];
    let result = run(&code);
    assert!(result.success);
    assert_eq!(result.stack, vec![U256::from(7u8)]);
}

#[test]
fn mstore8_then_return_exposes_one_byte() {
    let code = [0x60, 0x2a, 0x60, 0x00, 0x53, 0x60, 0x01, 0x60, 0x00, 0xf3];
    let result = run(&code);
    assert!(result.success);
    assert_eq!(result.return_data, Some(vec![0x2a]));
}

#[test]
fn mstore8_then_revert_reports_failure_with_same_data() {
    let code = [0x60, 0x2a, 0x60, 0x00, 0x53, 0x60, 0x01, 0x60, 0x00, 0xfd];
    let result = run(&code);
    assert!(!result.success);
    assert_eq!(result.return_data, Some(vec![0x2a]));
}

#[test]
fn call_into_account_whose_code_returns_data_copies_it_to_caller_memory() {
    // Callee code: PUSH1 0x99, PUSH1 0, MSTORE8, PUSH1 1, PUSH1 0, RETURN
    let callee_code = vec![0x60, 0x99, 0x60, 0x00, 0x53, 0x60, 0x01, 0x60, 0x00, 0xf3];
    let callee = Address::with_last_byte(1);
    let mut state = WorldState::default();
    state.insert(
        callee,
        Account {
            balance: U256::ZERO,
            code: callee_code,
        },
    );

    // Caller code: push retSize=1, retOffset=0, argsSize=0, argsOffset=0,
    // value=0, to=callee, gas=MAX, CALL, then MLOAD 0 to see the copied byte.
    let mut code = vec![
        0x60, 0x01, // retSize
        0x60, 0x00, // retOffset
        0x60, 0x00, // argsSize
        0x60, 0x00, // argsOffset
        0x60, 0x00, // value
    ];
    code.push(0x73); // PUSH20
    code.extend_from_slice(callee.as_slice());
    code.extend_from_slice(&[0x7f]); // PUSH32
    code.extend_from_slice(&[0xff; 32]); // gas = huge but irrelevant
    code.push(0xf1); // CALL
    code.push(0x60); // PUSH1
    code.push(0x00);
    code.push(0x51); // MLOAD

    let result = run(&code);
    assert!(result.success);
    // top of stack: the loaded word, with 0x99 in its most significant byte.
    let loaded = result.stack[0];
    assert_eq!(loaded.to_be_bytes::<32>()[0], 0x99);
}
