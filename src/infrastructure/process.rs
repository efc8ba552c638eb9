use std::process::Output;
use std::time::Duration;

use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("spawn failed: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("timed out after {0}s")]
    TimedOut(u64),
}

/// Runs an external command to completion with a bounded wait. Past the
/// deadline the child is killed and the caller gets a recoverable error.
pub async fn run_bounded(cmd: &mut Command, timeout: Duration) -> Result<Output, CommandError> {
    cmd.kill_on_drop(true);

    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(output) => Ok(output?),
        Err(_) => Err(CommandError::TimedOut(timeout.as_secs())),
    }
}
