//! Subprocess runner for external lint tools
//!
//! Runs a tool with a bounded timeout and returns either its captured
//! output or a typed [`ToolFault`]. Callers decide what a fault means;
//! nothing here panics or kills the request.

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Fault from invoking an external tool. Always absorbed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolFault {
    #[error("{tool} not found or could not be started: {message}")]
    Spawn { tool: String, message: String },
    #[error("{tool} timed out after {timeout_secs}s")]
    Timeout { tool: String, timeout_secs: u64 },
    #[error("failed to collect output from {tool}: {message}")]
    Output { tool: String, message: String },
}

/// Captured output of a completed tool run. A non-zero exit code is not a
/// fault here; linters exit non-zero whenever they find violations.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    pub return_code: i32,
}

/// Run `program` with `args`, killing it after `timeout_secs` seconds.
pub fn run_tool(
    program: &str,
    args: &[String],
    timeout_secs: u64,
) -> Result<ToolOutput, ToolFault> {
    debug!("running {program} {args:?}");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ToolFault::Spawn {
            tool: program.to_string(),
            message: e.to_string(),
        })?;

    // Drain both pipes off-thread while polling; a tool that writes more
    // than the pipe buffer would otherwise block and never exit.
    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();
    let stdout_reader = std::thread::spawn(move || read_pipe(stdout_pipe));
    let stderr_reader = std::thread::spawn(move || read_pipe(stderr_pipe));

    let start = Instant::now();
    let timeout = Duration::from_secs(timeout_secs);

    // Poll for completion; kill on deadline.
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let stdout = stdout_reader.join().unwrap_or_default();
                let stderr = stderr_reader.join().unwrap_or_default();
                return Ok(ToolOutput {
                    stdout,
                    stderr,
                    return_code: status.code().unwrap_or(-1),
                });
            }
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    // Killing the child closes its pipes, so the readers
                    // finish promptly.
                    let _ = stdout_reader.join();
                    let _ = stderr_reader.join();
                    warn!("{program} timed out after {timeout_secs}s");
                    return Err(ToolFault::Timeout {
                        tool: program.to_string(),
                        timeout_secs,
                    });
                }
                std::thread::sleep(Duration::from_millis(25));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = stdout_reader.join();
                let _ = stderr_reader.join();
                return Err(ToolFault::Output {
                    tool: program.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }
}

fn read_pipe(pipe: Option<impl Read>) -> String {
    let mut buf = String::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_string(&mut buf);
    }
    buf
}
