use std::future::Future;

/// Trait implementing the transport of CLI commands to VPP.
///
/// Implementors are free to use any transport (e.g., `vppctl`, the CLI
/// socket, the binary API's `cli_inband` message).
pub trait CliExecutor {
    /// Error returned by this trait.
    type Error: std::error::Error;

    /// Runs the given CLI command and returns VPP's textual reply.
    ///
    /// The whole reply is returned as one string.
    fn run_cli(&mut self, command: &str) -> impl Future<Output = Result<String, Self::Error>>;
}

impl<E: CliExecutor> CliExecutor for &mut E {
    type Error = E::Error;

    fn run_cli(&mut self, command: &str) -> impl Future<Output = Result<String, Self::Error>> {
        (**self).run_cli(command)
    }
}
