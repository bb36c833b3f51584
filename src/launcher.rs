//! Child process creation for single commands and two-stage pipelines.
//!
//! Failures come in two kinds. A redirection target that cannot be opened,
//! or a program that cannot be located or executed, is fatal only to that
//! command: it is reported on stderr and surfaces as
//! [`LaunchOutcome::Failed`]. Any other process-creation failure is returned
//! as an error for the caller to report; the caller then moves on to its next
//! command.
//!
//! Nothing here redirects the shell's own streams. All wiring is applied to
//! the spawned child only.

use crate::command::{ExitCode, FAILURE, exit_code};
use crate::redirect::Redirection;
use crate::tokenizer::tokenize;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// What became of a single launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Empty argument vector; nothing was started.
    Noop,
    /// The command could not be started. The reason was already reported.
    Failed,
    /// The child ran to completion with this exit code.
    Exited(ExitCode),
    /// The child was left running in the background with this process id.
    ///
    /// It is never waited on: no job table exists to reap it later.
    Detached(u32),
}

impl LaunchOutcome {
    /// Shell-style status: `None` while the command is still running (or never
    /// ran because there was nothing to run).
    pub fn exit_code(&self) -> Option<ExitCode> {
        match self {
            LaunchOutcome::Failed => Some(FAILURE),
            LaunchOutcome::Exited(code) => Some(*code),
            LaunchOutcome::Noop | LaunchOutcome::Detached(_) => None,
        }
    }
}

/// Outcome of both stages of a pipeline, each either `Exited` or `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub left: LaunchOutcome,
    pub right: LaunchOutcome,
}

/// Launch a single command with optional file redirection.
///
/// With `wait` set, blocks until the child exits. Otherwise prints the child's
/// process id and returns at once.
pub fn launch(args: &[String], redirection: &Redirection, wait: bool) -> Result<LaunchOutcome> {
    let Some((program, rest)) = args.split_first() else {
        return Ok(LaunchOutcome::Noop);
    };

    let mut command = Command::new(program);
    command.args(rest);

    if let Some(path) = &redirection.input {
        match File::open(path) {
            Ok(file) => {
                command.stdin(file);
            }
            Err(e) => {
                report_open_failure("input", path, &e);
                return Ok(LaunchOutcome::Failed);
            }
        }
    }

    if let Some(path) = &redirection.output {
        match open_for_output(path) {
            Ok(file) => {
                command.stdout(file);
            }
            Err(e) => {
                report_open_failure("output", path, &e);
                return Ok(LaunchOutcome::Failed);
            }
        }
    }

    let Some(mut child) = spawn(&mut command, program)? else {
        return Ok(LaunchOutcome::Failed);
    };
    // Release the parent's copies of any redirection files.
    drop(command);

    if !wait {
        let pid = child.id();
        println!("[Background PID: {}] {}", pid, program);
        debug!(pid, program = %program, "left running in background");
        return Ok(LaunchOutcome::Detached(pid));
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {}", program))?;
    debug!(program = %program, ?status, "command finished");
    Ok(LaunchOutcome::Exited(exit_code(status)))
}

/// Run `left | right` with one channel between the two stages.
///
/// Both command texts are tokenized here; stages do not support `<` or `>`.
/// The call always blocks until both stages have exited, left first.
pub fn launch_pipeline(left: &str, right: &str) -> Result<PipelineOutcome> {
    let left_args = tokenize(left);
    let right_args = tokenize(right);

    let mut producer = match stage_command(&left_args) {
        Some((mut command, program)) => {
            command.stdout(Stdio::piped());
            spawn(&mut command, program)?
        }
        None => None,
    };

    // A stage that never started leaves its side of the channel closed.
    let channel = producer
        .as_mut()
        .and_then(|child| child.stdout.take())
        .map(Stdio::from)
        .unwrap_or_else(Stdio::null);

    let consumer = match stage_command(&right_args) {
        Some((mut command, program)) => {
            command.stdin(channel);
            match spawn(&mut command, program) {
                Ok(child) => child,
                Err(e) => {
                    // The consumer never started; do not leave the producer behind.
                    drop(command);
                    if let Some(child) = producer {
                        let _ = wait_stage(Some(child), "left");
                    }
                    return Err(e);
                }
            }
        }
        None => {
            // Close the read end now so the producer gets EPIPE instead of
            // blocking on a full channel while it is waited on.
            drop(channel);
            None
        }
    };

    let left = wait_stage(producer, "left")?;
    let right = wait_stage(consumer, "right")?;
    debug!(?left, ?right, "pipeline finished");
    Ok(PipelineOutcome { left, right })
}

fn stage_command(args: &[String]) -> Option<(Command, &str)> {
    match args.split_first() {
        Some((program, rest)) => {
            let mut command = Command::new(program);
            command.args(rest);
            Some((command, program.as_str()))
        }
        None => {
            eprintln!("empty command in pipeline");
            None
        }
    }
}

fn wait_stage(child: Option<Child>, side: &str) -> Result<LaunchOutcome> {
    match child {
        Some(mut child) => {
            let status = child
                .wait()
                .with_context(|| format!("failed to wait for {} pipeline stage", side))?;
            Ok(LaunchOutcome::Exited(exit_code(status)))
        }
        None => Ok(LaunchOutcome::Failed),
    }
}

/// Spawn `command`, separating "this program cannot run" from resource errors.
///
/// Returns `Ok(None)` after reporting when the program is missing or not
/// executable.
fn spawn(command: &mut Command, program: &str) -> Result<Option<Child>> {
    match command.spawn() {
        Ok(child) => Ok(Some(child)),
        Err(e) if is_exec_failure(&e) => {
            eprintln!("{}: {}", program, e);
            debug!(program = %program, error = %e, "program could not be executed");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("failed to create process for {}", program)),
    }
}

fn is_exec_failure(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied | io::ErrorKind::InvalidInput
    )
}

fn open_for_output(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path)
}

fn report_open_failure(direction: &str, path: &Path, e: &io::Error) {
    eprintln!("Error opening {} file: {}: {}", direction, path.display(), e);
    debug!(direction, path = %path.display(), error = %e, "redirection target unavailable");
}
