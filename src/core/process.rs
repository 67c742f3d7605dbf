use std::process::ExitStatus;

/// Exit code a finished child reports to the launcher. A child killed by a
/// signal has no code and counts as a plain failure.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
