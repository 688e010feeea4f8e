// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 2.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the entry point of the cpubench binary. It runs the full
// benchmark suite; the hidden `worker` subcommand turns the binary into a
// multi-process benchmark worker.
//
// Tree Location:
// - src/main.rs (binary entry point)
// - Depends on: cpu_bench, clap, tokio, tracing, tracing-subscriber

use clap::Parser;
use cpu_bench::{
    BenchError,
    benchmark::{BenchmarkConfig, BenchmarkRunner, CancelFlag, ResultSet, report, worker},
    core::{Args, Command, HostInfo},
};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr: stdout carries the report, or the job protocol in
    // worker mode
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match args.command {
        Some(Command::Worker) => run_worker(),
        None => run_harness().await,
    }
}

fn run_worker() -> ExitCode {
    match worker::serve_stdio() {
        Ok(served) => {
            info!("Worker finished after {} jobs", served);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Worker failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run_harness() -> ExitCode {
    let config = BenchmarkConfig::default();
    let host = HostInfo::detect();
    println!("{}", report::render_header(&host, config.duration));

    let cancel = CancelFlag::new();
    let task_cancel = cancel.clone();
    let runner = BenchmarkRunner::new(config);
    let mut harness =
        tokio::task::spawn_blocking(move || runner.run(ResultSet::new(), &task_cancel));

    let joined = tokio::select! {
        joined = &mut harness => joined,
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => {
                    cancel.cancel();
                    info!("Interrupt received, stopping at the next batch boundary");
                }
                Err(err) => warn!("Could not listen for Ctrl-C: {}", err),
            }
            harness.await
        }
    };

    let outcome = joined
        .map_err(|err| BenchError::Runtime {
            message: err.to_string(),
        })
        .and_then(|result| result);

    match outcome {
        Ok(results) => {
            report::print_summary(&results);
            println!("\n✅ Benchmark complete!");
            ExitCode::SUCCESS
        }
        Err(err) if err.is_interrupted() => {
            println!("\n⚠️  Benchmark interrupted by user");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Benchmark run aborted: {:?}", err);
            eprintln!("❌ Error during benchmark: {}", err);
            ExitCode::FAILURE
        }
    }
}

// Changelog:
// - v2.0.0 (2025-07-02): Benchmark harness entry point.
//   - Replaced mining modes with the seven-benchmark suite and the hidden
//     worker subcommand.
//   - Ctrl-C sets the cancel flag; the run stops at the next batch boundary.
//   - Logging moved to stderr with RUST_LOG filtering.
