/// Thin wrappers over the xdg-utils tools (`xdg-settings`, `xdg-mime`,
/// `xdg-open`). This is the only place mat touches the desktop-entry and
/// association model, and it does so strictly through the tools' CLI.
use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Failures from delegating to an xdg-utils tool.
#[derive(Debug, Error)]
pub enum XdgError {
    /// The tool could not be started, typically because it is not installed.
    #[error("could not run {tool}: {source}")]
    Unavailable {
        /// Name of the tool that failed to start.
        tool: &'static str,
        /// The underlying spawn error.
        #[source]
        source: io::Error,
    },

    /// The tool ran and reported failure. Its own diagnostics went straight
    /// to our stderr, so only the status is carried here.
    #[error("{tool} failed with {status}")]
    Failed {
        /// Name of the tool that failed.
        tool: &'static str,
        /// Its exit status.
        status: ExitStatus,
    },
}

/// Desktop-entry id registered for an `xdg-settings` property, if any.
///
/// # Errors
///
/// Returns `XdgError` when `xdg-settings` cannot be run or exits nonzero.
pub fn settings_get(property: &[&str]) -> Result<Option<String>, XdgError> {
    let mut command = Command::new("xdg-settings");
    command.arg("get").args(property);
    capture("xdg-settings", &mut command)
}

/// Point an `xdg-settings` property at the given application.
///
/// # Errors
///
/// Returns `XdgError` when `xdg-settings` cannot be run or rejects the value.
pub fn settings_set(property: &[&str], app: &str) -> Result<(), XdgError> {
    let mut command = Command::new("xdg-settings");
    command.arg("set").args(property).arg(app);
    wait_for("xdg-settings", &mut command)
}

/// Desktop-entry id of the default application for a MIME type, if any.
///
/// # Errors
///
/// Returns `XdgError` when `xdg-mime` cannot be run or exits nonzero.
pub fn mime_default(mime: &str) -> Result<Option<String>, XdgError> {
    let mut command = Command::new("xdg-mime");
    command.args(["query", "default", mime]);
    capture("xdg-mime", &mut command)
}

/// Register the given desktop entry as the default for a MIME type.
///
/// # Errors
///
/// Returns `XdgError` when `xdg-mime` cannot be run or rejects the entry.
pub fn mime_set_default(desktop_id: &str, mime: &str) -> Result<(), XdgError> {
    let mut command = Command::new("xdg-mime");
    command.args(["default", desktop_id, mime]);
    wait_for("xdg-mime", &mut command)
}

/// Open a path or URL with the desktop's default application.
///
/// # Errors
///
/// Returns `XdgError` when `xdg-open` cannot be run or reports failure.
pub fn open_with_default(target: &OsStr) -> Result<(), XdgError> {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    wait_for("xdg-open", &mut command)
}

/// Run a query, capturing trimmed stdout; empty output means "nothing
/// registered". The tool's stderr is inherited so its diagnostics reach the
/// user unfiltered.
fn capture(tool: &'static str, command: &mut Command) -> Result<Option<String>, XdgError> {
    let output = command
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| XdgError::Unavailable { tool, source })?;
    if !output.status.success() {
        return Err(XdgError::Failed {
            tool,
            status: output.status,
        });
    }
    let id = String::from_utf8_lossy(&output.stdout).trim().to_owned();
    Ok((!id.is_empty()).then_some(id))
}

/// Run a mutation or launch, inheriting both output streams.
fn wait_for(tool: &'static str, command: &mut Command) -> Result<(), XdgError> {
    let status = command
        .status()
        .map_err(|source| XdgError::Unavailable { tool, source })?;
    if status.success() {
        Ok(())
    } else {
        Err(XdgError::Failed { tool, status })
    }
}
