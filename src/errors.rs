/// Errors shared by all mat sub-commands.
use thiserror::Error;

use crate::xdg::XdgError;

/// Failures a command can report back to the shell.
///
/// Every variant renders the exact text the user sees on stderr; the shell
/// prints it once and exits with [`MatError::exit_code`].
#[derive(Debug, Error)]
pub enum MatError {
    /// Malformed flags or a wrong positional count.
    ///
    /// Carries the pre-rendered block: the parser's error text, a blank
    /// line, and the full help text, already trimmed of the trailing
    /// newline.
    #[error("{text}")]
    Usage {
        /// Pre-rendered error-plus-help block.
        text: String,
    },

    /// The argument is a URL in a scheme this tool does not handle.
    #[error("Can't handle '{input}': '{scheme}' scheme not supported")]
    UnsupportedScheme {
        /// The argument as the user typed it.
        input: String,
        /// The scheme extracted from it.
        scheme: String,
    },

    /// A local path (or a `file:` URL resolved to one) does not exist.
    #[error("Cannot access '{input}': No such file or directory")]
    FileNotFound {
        /// The argument as the user typed it.
        input: String,
    },

    /// The default application was found but could not be started.
    #[error("Error while running the default application ({app}) for {input}")]
    LaunchFailed {
        /// Desktop-entry id of the application that failed to start.
        app: String,
        /// The target that was being opened.
        input: String,
    },

    /// Aggregate failure for `open`: per-target details were already
    /// reported while the targets were processed.
    #[error("Could not open {failed} of {total} target(s)")]
    OpenFailed {
        /// Number of targets that failed.
        failed: usize,
        /// Number of targets given on the command line.
        total: usize,
    },

    /// The delegate refused to register the given default application.
    #[error("Could not set '{app}' as the default {role}")]
    CouldNotSetDefault {
        /// The application name the user asked for.
        app: String,
        /// Role being assigned, e.g. "web browser".
        role: String,
    },

    /// An underlying xdg-utils invocation failed.
    #[error(transparent)]
    Xdg(#[from] XdgError),
}

impl MatError {
    /// Process exit status for this error.
    ///
    /// All mat failures map to the generic failure status.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        1
    }
}
