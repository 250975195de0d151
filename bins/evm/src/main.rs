//! A thin CLI front-end over `evm_core::execute`: decode a hex code string
//! plus optional JSON environment literals, run it, and print the result.
//! Not the conformance harness - see SPEC_FULL.md section 6.

use std::error::Error;
use std::fs;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Serialize;

use evm_core::config::EvmConfig;
use evm_core::{execute, ExecutionResult};
use primitives::evm_types::{BlockEnv, Transaction};
use primitives::hexutil::{parse_hex_bytes, to_hex_bytes};
use primitives::raw::{world_state_from_record, BlockRecord, StateRecord, TxRecord};
use primitives::world_state::WorldState;

/// Run a single EVM bytecode frame and report its resulting stack, logs and
/// return data.
#[derive(Parser, Debug)]
#[command(name = "evm", version, about = "Single-frame EVM bytecode interpreter")]
struct Cli {
    /// Bytecode to execute, as an unprefixed hex string (or a path, with --file).
    code: String,

    /// Treat `code` as a path to a file containing the hex string.
    #[arg(long)]
    file: bool,

    /// JSON-literal transaction record: {"to":"0x..","from":"0x..",...}.
    #[arg(long)]
    tx: Option<String>,

    /// JSON-literal block record: {"number":"0x1","timestamp":"0x..",...}.
    #[arg(long)]
    block: Option<String>,

    /// JSON-literal world-state record: {"0xaddr":{"balance":"0x..","code":{"bin":".."}}}.
    #[arg(long)]
    state: Option<String>,

    /// Print the result as JSON instead of formatted text.
    #[arg(long)]
    json: bool,

    /// Show trace-level per-opcode logging.
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct ResultView {
    success: bool,
    stack: Vec<String>,
    return_data: Option<String>,
    logs: Vec<LogView>,
}

#[derive(Debug, Serialize)]
struct LogView {
    address: String,
    topics: Vec<String>,
    data: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.verbose {
        init_logging(LevelFilter::Trace);
    }

    let hex_code = if cli.file {
        fs::read_to_string(&cli.code)?
    } else {
        cli.code.clone()
    };
    let code = parse_hex_bytes("code", hex_code.trim())?;

    let tx: Transaction = match &cli.tx {
        Some(json) => serde_json::from_str::<TxRecord>(json)?.try_into()?,
        None => Transaction::default(),
    };
    let block: BlockEnv = match &cli.block {
        Some(json) => serde_json::from_str::<BlockRecord>(json)?.try_into()?,
        None => BlockEnv::default(),
    };
    let state: WorldState = match &cli.state {
        Some(json) => {
            let record: StateRecord = serde_json::from_str(json)?;
            world_state_from_record(record)?
        }
        None => WorldState::default(),
    };

    let config = EvmConfig::default();
    let result = execute(&code, tx, block, &state, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&to_view(&result))?);
    } else {
        print_text(&result);
    }

    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}

fn to_view(result: &ExecutionResult) -> ResultView {
    ResultView {
        success: result.success,
        stack: result.stack.iter().map(|w| format!("0x{:x}", w)).collect(),
        return_data: result.return_data.as_ref().map(|d| to_hex_bytes(d)),
        logs: result
            .logs
            .iter()
            .map(|l| LogView {
                address: format!("{}", l.address),
                topics: l.topics.iter().map(|t| format!("0x{:x}", t)).collect(),
                data: to_hex_bytes(&l.data),
            })
            .collect(),
    }
}

fn print_text(result: &ExecutionResult) {
    println!("success: {}", result.success);
    println!("stack:");
    for word in &result.stack {
        println!("  0x{:x}", word);
    }
    match &result.return_data {
        Some(data) => println!("return_data: 0x{}", to_hex_bytes(data)),
        None => println!("return_data: (none)"),
    }
    for log in &result.logs {
        println!(
            "log: address={} topics={:?} data=0x{}",
            log.address,
            log.topics,
            to_hex_bytes(&log.data)
        );
    }
}

/// Initialise logging using a suitable pattern.
fn init_logging(level: LevelFilter) {
    let encoder = PatternEncoder::new("[{l}] {m}{n}");
    let stdout = ConsoleAppender::builder().encoder(Box::new(encoder)).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .unwrap();
    let _handle = log4rs::init_config(config).unwrap();
}
