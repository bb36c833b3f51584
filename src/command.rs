use std::process::ExitStatus;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// Child exit codes are reported back to callers of the launcher but never
/// become the shell's own exit status.
pub type ExitCode = i32;

/// Exit code recorded for a command that failed before its program ran.
pub const FAILURE: ExitCode = 1;

/// Convert a child's [`ExitStatus`] into a shell-style exit code.
///
/// Termination by a signal maps to `128 + signal`, as POSIX shells report it.
pub fn exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = exit_status.signal() {
        128 + signal
    } else if exit_status.core_dumped() {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}
