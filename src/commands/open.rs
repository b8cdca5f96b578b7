/// `mat open`: open files or URLs with their default applications.
use std::ffi::OsString;

use clap::Arg;

use crate::cli;
use crate::command::Command;
use crate::errors::MatError;
use crate::fileinfo::{self, FileArg};
use crate::xdg::{self, XdgError};

/// Opens each argument with the desktop's default application for it: local
/// files by MIME type, remote URLs by `x-scheme-handler/<scheme>`. A failed
/// target is reported and the rest are still attempted.
pub struct OpenCommand;

const NAME: &str = "open";
const DESCRIPTION: &str = "Open files with the default application";

fn signature() -> clap::Command {
    cli::signature(NAME, DESCRIPTION).arg(
        Arg::new("files")
            .value_name("FILE|URL")
            .num_args(0..)
            .help("Files or URLs to open"),
    )
}

impl Command for OpenCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn run(&self, argv: &[String]) -> Result<(), MatError> {
        let mut cmd = signature();
        let Some(matches) = cli::parse_command_line(&mut cmd, argv)? else {
            return Ok(());
        };

        let files: Vec<&String> = matches
            .get_many("files")
            .map(Iterator::collect)
            .unwrap_or_default();
        if files.is_empty() {
            return Err(cli::usage_error("No file or URL given", &mut cmd));
        }

        let total = files.len();
        let mut failed = 0;
        for file in files {
            if let Err(err) = open_one(file) {
                cli::report_error(&err);
                failed += 1;
            }
        }
        if failed == 0 {
            Ok(())
        } else {
            Err(MatError::OpenFailed { failed, total })
        }
    }
}

/// Resolve one target and hand it to `xdg-open`. A target with no registered
/// application is reported on stdout and does not count as a failure.
fn open_one(input: &str) -> Result<(), MatError> {
    let (content_type, target) = match fileinfo::classify(input) {
        FileArg::Local(path) => {
            if !path.exists() {
                return Err(MatError::FileNotFound {
                    input: input.to_owned(),
                });
            }
            (fileinfo::mime_type(&path), path.into_os_string())
        }
        FileArg::Remote { scheme } => {
            (format!("x-scheme-handler/{scheme}"), OsString::from(input))
        }
    };

    match xdg::mime_default(&content_type)? {
        Some(app) => match xdg::open_with_default(&target) {
            Ok(()) => Ok(()),
            Err(XdgError::Failed { .. }) => Err(MatError::LaunchFailed {
                app,
                input: input.to_owned(),
            }),
            Err(err) => Err(err.into()),
        },
        None => {
            println!("No default application for '{input}'");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<(), MatError> {
        let argv: Vec<String> = std::iter::once(NAME)
            .chain(args.iter().copied())
            .map(str::to_owned)
            .collect();
        OpenCommand.run(&argv)
    }

    #[test]
    fn test_no_target_is_a_usage_error() {
        let err = run(&[]).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("No file or URL given\n\n"), "got: {text}");
        assert!(text.contains("Usage: mat open"), "got: {text}");
    }

    #[test]
    fn test_missing_file_fails_without_spawning_anything() {
        let err = run(&["/tmp/does-not-exist-xyz"]).unwrap_err();
        assert!(
            matches!(err, MatError::OpenFailed { failed: 1, total: 1 }),
            "got: {err}"
        );
    }

    #[test]
    fn test_every_target_is_attempted() {
        let err = run(&["/tmp/does-not-exist-xyz", "/tmp/also-missing-xyz"]).unwrap_err();
        assert!(
            matches!(err, MatError::OpenFailed { failed: 2, total: 2 }),
            "got: {err}"
        );
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(run(&["--help"]).is_ok());
    }
}
