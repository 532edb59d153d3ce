use std::path::PathBuf;
use std::process::ExitStatus;

use vpptrace_tracer::executor::CliExecutor;

/// CLI executor running commands through `vppctl`.
#[derive(Debug)]
pub struct Vppctl {
    /// Path of the `vppctl` program.
    program: PathBuf,

    /// Path of VPP's CLI socket.
    socket: Option<PathBuf>,
}

impl Vppctl {
    /// Creates an executor spawning the given `vppctl` program, connecting
    /// to VPP's default CLI socket.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            socket: None,
        }
    }

    /// Specifies the CLI socket to connect to.
    pub fn with_socket(mut self, socket: Option<impl Into<PathBuf>>) -> Self {
        self.socket = socket.map(Into::into);
        self
    }

    fn command(&self, command: &str) -> tokio::process::Command {
        let mut vppctl = tokio::process::Command::new(&self.program);

        if let Some(ref socket) = self.socket {
            vppctl.arg("-s").arg(socket);
        }

        vppctl.args(command.split_whitespace());
        vppctl.kill_on_drop(true);
        vppctl
    }
}

impl Default for Vppctl {
    fn default() -> Self {
        Self::new("vppctl")
    }
}

impl CliExecutor for Vppctl {
    type Error = VppctlError;

    async fn run_cli(&mut self, command: &str) -> Result<String, Self::Error> {
        tracing::debug!(command, "running vppctl");

        let output = self.command(command).output().await?;

        if !output.status.success() {
            return Err(VppctlError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Error returned by [Vppctl].
#[derive(thiserror::Error, Debug)]
pub enum VppctlError {
    /// `vppctl` couldn't be spawned.
    #[error("Failed to spawn vppctl: {0}")]
    Spawn(#[from] std::io::Error),

    /// `vppctl` exited with an error.
    #[error("vppctl {status}: {stderr}")]
    Failed {
        /// Exit status of `vppctl`.
        status: ExitStatus,

        /// Error output of `vppctl`.
        stderr: String,
    },
}
