//! External command execution

use std::future::Future;

use tokio::process::Command;
use tracing::{debug, warn};

/// Executes external commands on behalf of the configurators
///
/// Implementations report only the exit outcome: `true` iff the process
/// exited successfully. They must never panic or propagate failures; a
/// command that cannot be spawned counts as a failed command. Callers are
/// responsible for acting on the boolean.
pub trait CommandRunner {
    /// Run `program` with `args` and wait for it to exit
    fn run(&self, program: &str, args: &[String]) -> impl Future<Output = bool> + Send;
}

/// Runs commands on the host system
///
/// stdout/stderr are left attached to the process; nothing is captured or
/// parsed beyond the exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> bool {
        match Command::new(program).args(args).status().await {
            Ok(status) => {
                if !status.success() {
                    debug!(program, code = ?status.code(), "command exited with failure");
                }
                status.success()
            }
            Err(err) => {
                warn!(program, %err, "failed to spawn command");
                false
            }
        }
    }
}
