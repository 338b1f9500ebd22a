use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{ProvisionError, ProvisionResult};

/// Run a command with stdin/stdout/stderr inherited so the tool's
/// own diagnostics reach the operator. Fails if the command
/// returns a non-zero exit code.
pub fn run_interactive(program: &str, args: &[&str]) -> ProvisionResult<()> {
    let command = format_command(program, args);
    info!("→ {command}");

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProvisionError::CommandNotFound(program.to_string())
            } else {
                ProvisionError::Io(e)
            }
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ProvisionError::CommandFailed { command, status })
    }
}

/// Render a program and its arguments the way an operator would
/// type them.
#[must_use]
pub fn format_command(program: &str, args: &[&str]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| (*a).to_string()));
    parts.join(" ")
}
