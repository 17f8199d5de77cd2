//! Simple subprocess execution.

use tracing::{error, warn};

/// Run a command given as a single string, split on whitespace only.
///
/// No shell is involved, so quoting and substitution are not supported
/// (`echo 'two words'` passes `'two` and `words'` as separate arguments).
/// Captured stdout is returned lossily decoded; spawn or wait failures are
/// logged and swallowed to `None`.
pub async fn run_shell_command(command: &str) -> Option<String> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        error!("refusing to run an empty command");
        return None;
    };
    let output = match tokio::process::Command::new(program)
        .args(parts)
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            error!(%command, error = %e, "unable to run command");
            return None;
        }
    };
    if !output.status.success() {
        warn!(%command, status = %output.status, "command exited with failure");
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
