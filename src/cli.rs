/// Shared command-line parse façade: tri-state outcome and error reporting.
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches};

use crate::errors::MatError;

/// Version string rendered by every `--version` flag.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of parsing one argument list.
///
/// Help and version requests are ordinary outcomes here, not process exits:
/// the caller decides what to print and how to terminate. Rendered texts are
/// trimmed of their trailing newline.
#[derive(Debug)]
pub enum ParseOutcome {
    /// The arguments parsed; proceed with the matches.
    Args(ArgMatches),
    /// `-h`/`--help`/`--help-all` was given; the rendered help text.
    Help(String),
    /// `-V`/`--version` was given; the rendered version line.
    Version(String),
    /// The parser rejected the input; its error text, without the usage
    /// trailer (callers append the full help text instead).
    Error(String),
}

/// Base parser shared by every sub-command: name, description, version flag,
/// and the `--help-all` alias next to clap's own `-h`/`--help`.
#[must_use]
pub fn signature(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name)
        .bin_name(format!("mat {name}"))
        .about(about)
        .version(VERSION)
        .arg(
            Arg::new("help-all")
                .long("help-all")
                .action(ArgAction::HelpLong)
                .help("Print help"),
        )
}

/// Parse `argv` against `cmd`, classifying the result.
pub fn parse(cmd: &mut clap::Command, argv: &[String]) -> ParseOutcome {
    match cmd.try_get_matches_from_mut(argv) {
        Ok(matches) => ParseOutcome::Args(matches),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => ParseOutcome::Help(err.to_string().trim_end().to_owned()),
            ErrorKind::DisplayVersion => {
                ParseOutcome::Version(err.to_string().trim_end().to_owned())
            }
            _ => ParseOutcome::Error(error_text(&err)),
        },
    }
}

/// The parser's error text with its trailing usage block removed; the full
/// help text is appended in its place when the error is reported.
fn error_text(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let text = rendered
        .split_once("\nUsage:")
        .map_or(rendered.as_str(), |(head, _)| head);
    text.trim_end().to_owned()
}

/// Parse `argv`, printing help or version output when it was requested.
///
/// Returns `Ok(None)` after help/version output: the command is done and
/// should report success.
///
/// # Errors
///
/// Returns `MatError::Usage` when the input is rejected, carrying the
/// parser's error text, a blank line, and the full help text.
pub fn parse_command_line(
    cmd: &mut clap::Command,
    argv: &[String],
) -> Result<Option<ArgMatches>, MatError> {
    match parse(cmd, argv) {
        ParseOutcome::Args(matches) => Ok(Some(matches)),
        ParseOutcome::Help(text) | ParseOutcome::Version(text) => {
            println!("{text}");
            Ok(None)
        }
        ParseOutcome::Error(text) => Err(usage_error(&text, cmd)),
    }
}

/// Build a usage error in the house format: message, blank line, full help.
#[must_use]
pub fn usage_error(message: &str, cmd: &mut clap::Command) -> MatError {
    let help = cmd.render_help();
    MatError::Usage {
        text: format!("{message}\n\n{help}").trim_end().to_owned(),
    }
}

/// Write an error to stderr. Every failure is reported exactly once.
pub fn report_error(err: &MatError) {
    eprintln!("{err}");
}
