/// The contract every mat sub-command satisfies.
use crate::errors::MatError;

/// One named, independently invocable sub-tool.
///
/// Commands are registered into the [`CommandManager`](crate::manager::CommandManager)
/// at startup and invoked at most once per process run. Each command owns its
/// own argument grammar: `run` receives the argument list starting at the
/// sub-command's own name (the program-name slot of its parser) and parses it
/// with the shared façade in [`cli`](crate::cli).
///
/// Help and version requests are printed to stdout inside `run` and return
/// `Ok(())`; every other failure is returned as a [`MatError`] for the shell
/// to report. Nothing exits the process from inside a command.
pub trait Command {
    /// Stable identifier used for dispatch and help alignment.
    fn name(&self) -> &str;

    /// One-line description shown in the top-level command listing.
    fn description(&self) -> &str;

    /// Execute the command with `argv[0]` being its own name.
    ///
    /// # Errors
    ///
    /// Returns `MatError` on any parse or runtime failure.
    fn run(&self, argv: &[String]) -> Result<(), MatError>;
}
