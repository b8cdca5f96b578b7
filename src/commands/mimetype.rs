/// `mat mimetype`: print the MIME type of a single file.
use clap::Arg;

use crate::cli;
use crate::command::Command;
use crate::errors::MatError;
use crate::fileinfo::{self, FileArg};

/// Determines a file's MIME type from its name, or `inode/directory` for
/// directories. Accepts a local path or a `file:` URL; any other URL scheme
/// is rejected.
pub struct MimeTypeCommand;

const NAME: &str = "mimetype";
const DESCRIPTION: &str = "Determines a file (mime)type";

fn signature() -> clap::Command {
    cli::signature(NAME, DESCRIPTION).arg(
        Arg::new("file")
            .value_name("FILE|URL")
            .num_args(0..)
            .help("File path or file: URL to inspect"),
    )
}

impl Command for MimeTypeCommand {
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
            .get_many("file")
            .map(Iterator::collect)
            .unwrap_or_default();
        let file = match files.as_slice() {
            [] => return Err(cli::usage_error("No file given", &mut cmd)),
            [one] => (*one).as_str(),
            _ => return Err(cli::usage_error("Only one file, please", &mut cmd)),
        };

        match fileinfo::classify(file) {
            FileArg::Local(path) => {
                if !path.exists() {
                    return Err(MatError::FileNotFound {
                        input: file.to_owned(),
                    });
                }
                println!("{}", fileinfo::mime_type(&path));
                Ok(())
            }
            FileArg::Remote { scheme } => Err(MatError::UnsupportedScheme {
                input: file.to_owned(),
                scheme,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(args: &[&str]) -> Result<(), MatError> {
        let argv: Vec<String> = std::iter::once(NAME)
            .chain(args.iter().copied())
            .map(str::to_owned)
            .collect();
        MimeTypeCommand.run(&argv)
    }

    #[test]
    fn test_no_file_is_a_usage_error() {
        let err = run(&[]).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("No file given\n\n"), "got: {text}");
        assert!(text.contains("Usage: mat mimetype"), "got: {text}");
    }

    #[test]
    fn test_more_than_one_file_is_a_usage_error() {
        let err = run(&["/tmp/a.txt", "/tmp/b.txt"]).unwrap_err();
        assert!(
            err.to_string().starts_with("Only one file, please\n\n"),
            "got: {err}"
        );
    }

    #[test]
    fn test_missing_file_reports_the_raw_argument() {
        let err = run(&["/tmp/does-not-exist-xyz"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot access '/tmp/does-not-exist-xyz': No such file or directory"
        );
    }

    #[test]
    fn test_non_file_scheme_is_rejected() {
        let err = run(&["http://example.com/a.txt"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Can't handle 'http://example.com/a.txt': 'http' scheme not supported"
        );
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(run(&["--help"]).is_ok());
    }
}
