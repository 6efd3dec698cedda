//! Bounded execution of external programs.
//!
//! Both the document converter and the theme probe are external processes. Neither may block a
//! render indefinitely, so every invocation goes through [`run_with_timeout`]: the child is
//! polled until a deadline, killed when the deadline passes, and its pipes are drained on
//! helper threads so a chatty child cannot dead-lock on a full pipe.

use crate::error::RenderError;
use std::io::{Read, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Longest deadline honoured; larger timeouts are clamped to it.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Captured output of a successful process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Run `command`, optionally feeding `input` on stdin, and wait at most `timeout`.
///
/// A non-zero exit status is an error ([`RenderError::ProcessFailed`]), as is a missing
/// program ([`RenderError::ProcessSpawn`]) or an expired deadline
/// ([`RenderError::ProcessTimeout`]). On timeout the child is killed. `timeout` is clamped
/// to [`MAX_TIMEOUT`].
pub fn run_with_timeout(
    command: &mut Command,
    input: Option<&str>,
    timeout: Duration,
) -> Result<ProcessOutput, RenderError> {
    let program = command.get_program().to_string_lossy().into_owned();
    let timeout = timeout.min(MAX_TIMEOUT);
    let deadline = Instant::now() + timeout;

    command
        .stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().map_err(|source| RenderError::ProcessSpawn {
        program: program.clone(),
        source,
    })?;

    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        let text = text.to_owned();
        // A child that exits early closes the pipe; the write error is irrelevant then.
        thread::spawn(move || {
            let _ = stdin.write_all(text.as_bytes());
        });
    }

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(err) => {
                kill(&mut child);
                return Err(err.into());
            }
        }
        if Instant::now() >= deadline {
            kill(&mut child);
            return Err(RenderError::ProcessTimeout {
                program,
                after: timeout,
            });
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stdout = collect(stdout, deadline, &program, timeout)?;
    let stderr = collect(stderr, deadline, &program, timeout)?;

    if !status.success() {
        return Err(RenderError::ProcessFailed {
            program,
            status: status.to_string(),
            stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8(stdout).map_err(|_| {
        RenderError::MalformedOutput(format!("'{program}' produced non UTF-8 output"))
    })?;

    Ok(ProcessOutput {
        stdout,
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<std::io::Result<Vec<u8>>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let result = match pipe {
            Some(mut pipe) => pipe.read_to_end(&mut buffer).map(|_| buffer),
            None => Ok(buffer),
        };
        let _ = tx.send(result);
    });
    rx
}

fn collect(
    rx: Receiver<std::io::Result<Vec<u8>>>,
    deadline: Instant,
    program: &str,
    timeout: Duration,
) -> Result<Vec<u8>, RenderError> {
    let remaining = deadline.saturating_duration_since(Instant::now());
    match rx.recv_timeout(remaining) {
        Ok(result) => Ok(result?),
        // The child exited but something it spawned still holds the pipe open.
        Err(RecvTimeoutError::Timeout) => Err(RenderError::ProcessTimeout {
            program: program.to_string(),
            after: timeout,
        }),
        Err(RecvTimeoutError::Disconnected) => Err(RenderError::Internal(format!(
            "output reader for '{program}' stopped unexpectedly"
        ))),
    }
}

fn kill(child: &mut Child) {
    if let Err(err) = child.kill() {
        tracing::debug!(error = %err, "failed to kill timed out process");
    }
    let _ = child.wait();
}
