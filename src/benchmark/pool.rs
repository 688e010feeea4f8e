// CPU Bench - Free and Open Source Software Statement
//
// This project, cpu-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/benchmark/pool.rs
// Version: 1.0.2
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the process pool used by the multi-process benchmark.
// Workers are long-lived child processes spoken to over stdin/stdout pipes
// (see worker.rs). The pool is closed by dropping every worker's stdin and
// joined by waiting on every child. Dropping an unjoined pool does both, so
// no worker outlives the pool even when the benchmark bails out early.
//
// Tree Location:
// - src/benchmark/pool.rs (worker process pool)
// - Depends on: serde_json, log

use crate::Result;
use crate::benchmark::worker::{WorkRequest, WorkResponse};
use crate::error::BenchError;
use log::{debug, warn};
use std::ffi::OsString;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

const LOG_TARGET: &str = "cpu_bench::pool";

/// How to launch one worker process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl WorkerCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Re-execute the running binary with the hidden `worker` subcommand
    pub fn current_exe() -> Result<Self> {
        let program = std::env::current_exe().map_err(|source| BenchError::WorkerSpawn {
            program: PathBuf::from("<current executable>"),
            source,
        })?;
        Ok(Self::new(program).arg("worker"))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        // Keep terminal interrupts away from workers; the driver stops at the
        // next batch boundary and closes the pool itself.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        command
    }
}

struct PoolWorker {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Option<BufReader<ChildStdout>>,
}

/// Fixed-size pool of worker processes
pub struct ProcessPool {
    workers: Vec<PoolWorker>,
    joined: bool,
}

impl ProcessPool {
    /// Launch `size` workers (at least one).
    pub fn spawn(command: &WorkerCommand, size: usize) -> Result<Self> {
        let size = size.max(1);
        let mut pool = Self {
            workers: Vec::with_capacity(size),
            joined: false,
        };

        for index in 0..size {
            // On failure `pool` drops here and joins the workers already started
            let mut child = command
                .command()
                .spawn()
                .map_err(|source| BenchError::WorkerSpawn {
                    program: command.program.clone(),
                    source,
                })?;
            let stdin = child.stdin.take();
            let stdout = child.stdout.take().map(BufReader::new);
            debug!(target: LOG_TARGET, "Worker {} started (pid {})", index, child.id());
            pool.workers.push(PoolWorker {
                child,
                stdin,
                stdout,
            });
        }

        debug!(target: LOG_TARGET, "Process pool ready with {} workers", size);
        Ok(pool)
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Run every job on the pool and return the responses in job order.
    /// Job `i` goes to worker `i % size`; the call returns only after every
    /// job has been answered. Jobs go out in rounds of at most one per
    /// worker, and a round is fully read back before the next is written, so
    /// neither side can fill a pipe the other is not draining.
    pub fn map(&mut self, jobs: &[WorkRequest]) -> Result<Vec<WorkResponse>> {
        let size = self.workers.len();
        let mut responses: Vec<WorkResponse> = Vec::with_capacity(jobs.len());

        for round in jobs.chunks(size) {
            for (worker, job) in round.iter().enumerate() {
                self.send(worker, job)?;
            }
            for worker in 0..round.len() {
                responses.push(self.receive(worker)?);
            }
        }

        Ok(responses)
    }

    fn send(&mut self, worker: usize, job: &WorkRequest) -> Result<()> {
        let mut line = serde_json::to_vec(job)?;
        line.push(b'\n');
        let stdin = self.workers[worker]
            .stdin
            .as_mut()
            .ok_or(BenchError::WorkerDisconnected { worker })?;
        stdin
            .write_all(&line)
            .and_then(|_| stdin.flush())
            .map_err(|source| BenchError::WorkerIo { worker, source })
    }

    fn receive(&mut self, worker: usize) -> Result<WorkResponse> {
        let stdout = self.workers[worker]
            .stdout
            .as_mut()
            .ok_or(BenchError::WorkerDisconnected { worker })?;
        let mut line = String::new();
        let read = stdout
            .read_line(&mut line)
            .map_err(|source| BenchError::WorkerIo { worker, source })?;
        if read == 0 {
            return Err(BenchError::WorkerDisconnected { worker });
        }
        Ok(serde_json::from_str(line.trim_end())?)
    }

    /// Stop accepting work: every worker sees EOF on stdin and exits.
    pub fn close(&mut self) {
        for worker in &mut self.workers {
            worker.stdin.take();
        }
    }

    /// Close the pool and wait for every worker to exit. Every worker is
    /// waited on even if an earlier one fails; the first failure is
    /// returned. Calling it again after a join is a no-op.
    pub fn join(&mut self) -> Result<()> {
        if self.joined {
            return Ok(());
        }
        self.close();

        let mut first_error = None;
        for (index, worker) in self.workers.iter_mut().enumerate() {
            match worker.child.wait() {
                Ok(status) if status.success() => {
                    debug!(target: LOG_TARGET, "Worker {} exited", index);
                }
                Ok(status) => {
                    first_error.get_or_insert(BenchError::WorkerExit {
                        worker: index,
                        status: status.to_string(),
                    });
                }
                Err(source) => {
                    let _ = worker.child.kill();
                    let _ = worker.child.wait();
                    first_error.get_or_insert(BenchError::WorkerIo {
                        worker: index,
                        source,
                    });
                }
            }
            worker.stdout.take();
        }
        self.joined = true;

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn is_joined(&self) -> bool {
        self.joined
    }

    /// Workers whose process has not exited yet
    pub fn running_workers(&mut self) -> usize {
        let mut running = 0;
        for worker in &mut self.workers {
            if let Ok(None) = worker.child.try_wait() {
                running += 1;
            }
        }
        running
    }
}

impl Drop for ProcessPool {
    fn drop(&mut self) {
        if !self.joined {
            if let Err(err) = self.join() {
                warn!(target: LOG_TARGET, "Process pool cleanup failed: {}", err);
            }
        }
    }
}

// Changelog:
// - v1.0.2 (2025-07-09): map dispatches one job per worker per round.
//   - Writing a whole batch before reading could fill both pipes and hang.
//   - running_workers counts with a plain loop.
// - v1.0.1 (2025-07-04): Workers start in their own process group on Unix.
// - v1.0.0 (2025-07-02): Initial process pool.
//   - Long-lived workers over JSON-line pipes, close/join, join-on-drop.
