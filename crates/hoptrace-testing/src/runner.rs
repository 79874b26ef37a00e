//! A [`ProcessRunner`] that never starts a process.

use hoptrace_runtime::{ProcessOutput, ProcessRunner};
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub argv: Vec<String>,
    pub timeout: Duration,
}

impl Invocation {
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Default)]
struct Script {
    responses: HashMap<String, VecDeque<ProcessOutput>>,
    calls: Vec<Invocation>,
}

/// Replays scripted output keyed by program file name.
///
/// Responses queued for a program are handed out in order; the last one
/// repeats. Programs with nothing scripted fail as if the binary were
/// missing. Clones share the same script and call log, so a clone can be
/// handed to the workspace while the test keeps the original.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    inner: Arc<Mutex<Script>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `output` for `program`.
    pub fn respond(self, program: &str, output: ProcessOutput) -> Self {
        self.lock()
            .responses
            .entry(program.to_string())
            .or_default()
            .push_back(output);
        self
    }

    /// Queue a successful run that printed `stdout`.
    pub fn respond_stdout(self, program: &str, stdout: &str) -> Self {
        self.respond(program, success(stdout))
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Calls whose program file name is `program`.
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.lock()
            .calls
            .iter()
            .filter(|call| file_name(call.program()) == program)
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, argv: &[String], timeout: Duration) -> ProcessOutput {
        let mut script = self.lock();
        script.calls.push(Invocation {
            argv: argv.to_vec(),
            timeout,
        });

        let Some(program) = argv.first() else {
            return ProcessOutput::empty_command();
        };
        match script.responses.get_mut(file_name(program)) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_else(not_scripted),
            Some(queue) => queue.front().cloned().unwrap_or_else(not_scripted),
            None => not_scripted(),
        }
    }
}

/// Exit code 0 with `stdout`.
pub fn success(stdout: &str) -> ProcessOutput {
    ProcessOutput {
        stdout: Some(stdout.to_string()),
        stderr: String::new(),
        return_code: 0,
    }
}

/// Non-zero exit with nothing on stdout.
pub fn failure(stderr: &str, return_code: i32) -> ProcessOutput {
    ProcessOutput {
        stdout: Some(String::new()),
        stderr: stderr.to_string(),
        return_code,
    }
}

fn not_scripted() -> ProcessOutput {
    ProcessOutput::spawn_failed("No such file or directory (os error 2)")
}

fn file_name(program: &str) -> &str {
    Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program)
}
