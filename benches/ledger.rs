//! Benchmark suite for replaying transaction logs
//!
//! Uses the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Inputs
//!
//! Inputs are generated in memory at three sizes (100, 10,000 and 1,000,000
//! rows). Each mixes deposits and withdrawals across many clients with periodic
//! dispute, resolve, and chargeback flows.

use std::fmt::Write;
use tx_ledger::{run, CsvRecordSource, LedgerConfig, LedgerEngine};

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 10_000, 1_000_000];

fn client_of(tx: u32) -> u16 {
    (tx % 500) as u16 + 1
}

fn generate_input(rows: usize) -> String {
    let mut input = String::from("type, client, tx, amount\n");

    for tx in 1..=rows as u32 {
        let written = match tx % 10 {
            0 => writeln!(input, "withdrawal, {}, {}, {}.25", client_of(tx), tx, tx % 7),
            3 | 7 => writeln!(input, "dispute, {}, {}", client_of(tx - 1), tx - 1),
            4 => writeln!(input, "resolve, {}, {}", client_of(tx - 2), tx - 2),
            8 => writeln!(input, "chargeback, {}, {}", client_of(tx - 2), tx - 2),
            _ => writeln!(input, "deposit, {}, {}, {}.5", client_of(tx), tx, tx % 100),
        };
        written.expect("Failed to generate input");
    }

    input
}

/// Parse and apply only
#[divan::bench(args = SIZES)]
fn process(bencher: divan::Bencher, rows: usize) {
    let input = generate_input(rows);

    bencher.bench(|| {
        let source = CsvRecordSource::new(input.as_bytes()).expect("Invalid header");
        LedgerEngine::new()
            .process(source)
            .expect("Processing failed")
    });
}

/// Parse, apply, and write the report
#[divan::bench(args = SIZES)]
fn run_to_report(bencher: divan::Bencher, rows: usize) {
    let input = generate_input(rows);

    bencher.bench(|| {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, LedgerConfig::default()).expect("Processing failed");
        output
    });
}
