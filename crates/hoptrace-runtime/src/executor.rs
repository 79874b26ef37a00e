//! Launching diagnostic tools.
//!
//! Commands are started directly from an argument vector, never through a
//! shell. Output is captured in full; a run that outlives its timeout is
//! killed and reported as timed out. On Unix each tool gets its own process
//! group so a timeout also takes down anything it forked.

use serde::Serialize;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const TIMED_OUT: &str = "Command timed out";
pub const EMPTY_COMMAND: &str = "Empty command";

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// What a finished (or abandoned) process left behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessOutput {
    /// `None` when the process could not be started or timed out.
    pub stdout: Option<String>,
    pub stderr: String,
    /// Exit code; `-1` for spawn failures, timeouts and signal deaths.
    pub return_code: i32,
}

impl ProcessOutput {
    pub fn timed_out() -> Self {
        Self {
            stdout: None,
            stderr: TIMED_OUT.to_string(),
            return_code: -1,
        }
    }

    pub fn spawn_failed(message: impl Into<String>) -> Self {
        Self {
            stdout: None,
            stderr: message.into(),
            return_code: -1,
        }
    }

    pub fn empty_command() -> Self {
        Self {
            stdout: Some(String::new()),
            stderr: EMPTY_COMMAND.to_string(),
            return_code: 1,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.stdout.is_none() && self.stderr == TIMED_OUT
    }

    /// Captured stdout when there is any to look at.
    pub fn usable_stdout(&self) -> Option<&str> {
        self.stdout.as_deref().filter(|s| !s.is_empty())
    }
}

/// Seam between orchestration and the operating system.
pub trait ProcessRunner {
    fn run(&self, argv: &[String], timeout: Duration) -> ProcessOutput;
}

/// Runs real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String], timeout: Duration) -> ProcessOutput {
        let Some((program, args)) = argv.split_first() else {
            return ProcessOutput::empty_command();
        };

        info!(?argv, "executing");
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        isolate(&mut command);
        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                warn!(program = %program, error = %err, "failed to start");
                return ProcessOutput::spawn_failed(err.to_string());
            }
        };

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        match wait_timeout(&mut child, timeout) {
            Ok(Some(status)) => {
                let stdout = join(stdout);
                let stderr = join(stderr);
                let return_code = status.code().unwrap_or(-1);
                debug!(return_code, "process finished");
                ProcessOutput {
                    stdout: Some(stdout),
                    stderr,
                    return_code,
                }
            }
            Ok(None) => {
                warn!(program = %program, timeout_secs = timeout.as_secs(), "timed out, killing");
                terminate(&mut child);
                join(stdout);
                join(stderr);
                ProcessOutput::timed_out()
            }
            Err(err) => {
                terminate(&mut child);
                join(stdout);
                join(stderr);
                ProcessOutput::spawn_failed(err.to_string())
            }
        }
    }
}

#[cfg(unix)]
fn isolate(command: &mut Command) {
    use std::os::unix::process::CommandExt;
    command.process_group(0);
}

#[cfg(not(unix))]
fn isolate(_command: &mut Command) {}

/// Kill the child and everything in its process group, then reap it.
///
/// Once the group is gone no writer holds the output pipes, so the reader
/// threads reach EOF and can be joined.
fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(pid) = libc::pid_t::try_from(child.id()) {
            // SAFETY: `pid` leads the group created by `isolate` for this child.
            unsafe {
                libc::kill(-pid, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    let mut pipe = pipe?;
    Some(thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }))
}

fn join(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

fn wait_timeout(
    child: &mut Child,
    timeout: Duration,
) -> std::io::Result<Option<std::process::ExitStatus>> {
    let start = Instant::now();
    loop {
        match child.try_wait()? {
            Some(status) => return Ok(Some(status)),
            None => {
                if start.elapsed() > timeout {
                    return Ok(None);
                }
                thread::sleep(POLL_INTERVAL);
            }
        }
    }
}
