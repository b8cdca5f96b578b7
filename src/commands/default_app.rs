/// `mat def-*`: get or set the desktop's default application for a role.
use clap::Arg;

use crate::cli;
use crate::command::Command;
use crate::errors::MatError;
use crate::xdg::{self, XdgError};

/// How a role is recorded in the desktop's association database.
enum Association {
    /// An `xdg-settings` property, given as its argument words.
    Settings(&'static [&'static str]),
    /// The default handler for a MIME type, via `xdg-mime`.
    Mime(&'static str),
}

/// One `def-<role>` command. All four share the same grammar: no arguments
/// prints the current default's desktop-entry id, `-s/--set APPLICATION`
/// registers a new one.
pub struct DefaultAppCommand {
    name: &'static str,
    description: &'static str,
    /// Role noun as it appears in messages, e.g. "web browser".
    role: &'static str,
    set_help: &'static str,
    association: Association,
}

impl DefaultAppCommand {
    #[must_use]
    pub fn web_browser() -> Self {
        Self {
            name: "def-web-browser",
            description: "Get/Set the default web browser",
            role: "web browser",
            set_help: "Web Browser to be set as default",
            association: Association::Settings(&["default-web-browser"]),
        }
    }

    #[must_use]
    pub fn email_client() -> Self {
        Self {
            name: "def-email-client",
            description: "Get/Set the default email client",
            role: "email client",
            set_help: "Email Client to be set as default",
            association: Association::Settings(&["default-url-scheme-handler", "mailto"]),
        }
    }

    #[must_use]
    pub fn file_manager() -> Self {
        Self {
            name: "def-file-manager",
            description: "Get/Set the default file manager",
            role: "file manager",
            set_help: "File Manager to be set as default",
            association: Association::Mime("inode/directory"),
        }
    }

    #[must_use]
    pub fn terminal() -> Self {
        Self {
            name: "def-terminal",
            description: "Get/Set the default terminal",
            role: "terminal",
            set_help: "Terminal to be set as default",
            // xdg-settings has no terminal property; the scheme-handler
            // entry in mimeapps.list is the conventional record.
            association: Association::Mime("x-scheme-handler/terminal"),
        }
    }

    fn signature(&self) -> clap::Command {
        cli::signature(self.name, self.description)
            .arg(
                Arg::new("set")
                    .short('s')
                    .long("set")
                    .value_name("APPLICATION")
                    .help(self.set_help),
            )
            .arg(Arg::new("extra").num_args(0..).hide(true))
    }

    fn current(&self) -> Result<(), MatError> {
        let id = match &self.association {
            Association::Settings(property) => xdg::settings_get(property)?,
            Association::Mime(mime) => xdg::mime_default(mime)?,
        };
        if let Some(id) = id {
            println!("{id}");
        }
        Ok(())
    }

    fn assign(&self, app: &str) -> Result<(), MatError> {
        let result = match &self.association {
            Association::Settings(property) => xdg::settings_set(property, app),
            Association::Mime(mime) => xdg::mime_set_default(app, mime),
        };
        match result {
            Ok(()) => {
                println!("Set '{app}' as the default {}", self.role);
                Ok(())
            }
            Err(XdgError::Failed { .. }) => Err(MatError::CouldNotSetDefault {
                app: app.to_owned(),
                role: self.role.to_owned(),
            }),
            Err(err) => Err(err.into()),
        }
    }
}

impl Command for DefaultAppCommand {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn run(&self, argv: &[String]) -> Result<(), MatError> {
        let mut cmd = self.signature();
        let Some(matches) = cli::parse_command_line(&mut cmd, argv)? else {
            return Ok(());
        };

        let extra: Vec<&String> = matches
            .get_many("extra")
            .map(Iterator::collect)
            .unwrap_or_default();
        let set = matches.get_one::<String>("set");

        if !extra.is_empty() {
            if set.is_some() {
                let list = extra
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                return Err(cli::usage_error(
                    &format!("Extra arguments given: {list}"),
                    &mut cmd,
                ));
            }
            return Err(cli::usage_error(
                &format!("To set the default {} use the -s/--set option", self.role),
                &mut cmd,
            ));
        }

        match set {
            Some(app) => self.assign(app),
            None => self.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: &DefaultAppCommand, args: &[&str]) -> Result<(), MatError> {
        let argv: Vec<String> = std::iter::once(command.name)
            .chain(args.iter().copied())
            .map(str::to_owned)
            .collect();
        command.run(&argv)
    }

    #[test]
    fn test_set_rejects_stray_arguments() {
        let err = run(
            &DefaultAppCommand::web_browser(),
            &["--set", "firefox.desktop", "stray"],
        )
        .unwrap_err();
        assert!(
            err.to_string().starts_with("Extra arguments given: stray\n\n"),
            "got: {err}"
        );
    }

    #[test]
    fn test_stray_arguments_are_listed_comma_separated() {
        let err = run(
            &DefaultAppCommand::terminal(),
            &["--set", "foot.desktop", "a", "b"],
        )
        .unwrap_err();
        assert!(
            err.to_string().starts_with("Extra arguments given: a,b\n\n"),
            "got: {err}"
        );
    }

    #[test]
    fn test_positional_without_set_hints_at_the_option() {
        let err = run(&DefaultAppCommand::email_client(), &["thunderbird.desktop"]).unwrap_err();
        let text = err.to_string();
        assert!(
            text.starts_with("To set the default email client use the -s/--set option\n\n"),
            "got: {text}"
        );
        assert!(text.contains("Usage: mat def-email-client"), "got: {text}");
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(run(&DefaultAppCommand::file_manager(), &["--help"]).is_ok());
    }
}
