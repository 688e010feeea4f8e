// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/worker_cli_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file drives the `cpubench` binary directly: the hidden worker
// subcommand over real pipes, and the help output.
//
// Tree Location:
// - tests/worker_cli_test.rs (binary-level tests)
// - Depends on: cpubench binary, serde_json

use cpu_bench::benchmark::worker::{WorkRequest, WorkResponse, work};
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

#[test]
fn test_worker_subcommand_answers_and_exits_on_eof() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cpubench"))
        .arg("worker")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("worker should start");

    let mut stdin = child.stdin.take().unwrap();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    for iterations in [1u64, 1_000, 250_000] {
        let request = WorkRequest { iterations };
        writeln!(stdin, "{}", serde_json::to_string(&request).unwrap()).unwrap();
        stdin.flush().unwrap();

        let mut line = String::new();
        stdout.read_line(&mut line).unwrap();
        let response: WorkResponse = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(response, work(request));
    }

    drop(stdin);
    let status = child.wait().unwrap();
    assert!(status.success());
}

#[test]
fn test_worker_subcommand_fails_on_bad_input() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cpubench"))
        .arg("worker")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("worker should start");

    {
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"{\"iterations\": \"many\"}\n").unwrap();
    }
    let status = child.wait().unwrap();
    assert!(!status.success());
}

#[test]
fn test_help_does_not_advertise_worker() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpubench"))
        .arg("--help")
        .output()
        .expect("help should run");
    assert!(output.status.success());

    let help = String::from_utf8_lossy(&output.stdout);
    assert!(help.contains("composite score"));
    assert!(!help.contains("worker"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpubench"))
        .arg("--duration")
        .arg("1")
        .output()
        .expect("binary should run");
    assert!(!output.status.success());
}
