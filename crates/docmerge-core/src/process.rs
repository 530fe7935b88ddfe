//! Running external helper programs with a deadline.

use std::ffi::OsString;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::process::Command;

use crate::error::{DocError, Result};

/// Max bytes of stderr carried into an error message.
const STDERR_TAIL: usize = 2048;

/// Runs `program args...` to completion, killing it if `timeout` elapses.
pub(crate) async fn run(program: &str, args: &[OsString], timeout: Duration) -> Result<Output> {
    tracing::debug!(program, ?args, "spawning");
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| DocError::Spawn {
            program: program.to_string(),
            source,
        })?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(output) => Ok(output?),
        Err(_) => {
            tracing::warn!(program, timeout_secs = timeout.as_secs(), "process timed out");
            Err(DocError::Timeout {
                program: program.to_string(),
                timeout,
            })
        }
    }
}

/// Maps an exit status outside `ok_codes` to [`DocError::ProcessFailed`].
pub(crate) fn ensure_success(program: &str, output: &Output, ok_codes: &[i32]) -> Result<()> {
    match output.status.code() {
        Some(code) if ok_codes.contains(&code) => Ok(()),
        _ => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let mut start = stderr.len().saturating_sub(STDERR_TAIL);
            while !stderr.is_char_boundary(start) {
                start += 1;
            }
            Err(DocError::ProcessFailed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: stderr[start..].to_string(),
            })
        }
    }
}

/// Writes an executable `sh` script standing in for an external tool.
#[cfg(all(test, unix))]
pub(crate) fn write_script(dir: &std::path::Path, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
