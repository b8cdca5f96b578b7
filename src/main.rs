#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! mat — query MIME types and manage freedesktop.org default applications.

mod cli;
mod command;
mod commands;
mod errors;
mod fileinfo;
mod manager;
mod xdg;

use clap::{Arg, ArgAction};

use cli::ParseOutcome;
use errors::MatError;
use manager::CommandManager;

fn main() {
    let mut manager = CommandManager::new();
    commands::register_all(&mut manager);

    // Lossy decode: a non-UTF-8 path turns into a replacement-character name
    // that the existence checks report like any other missing file.
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    match dispatch(&manager, &argv) {
        Ok(()) => {}
        Err(err) => {
            cli::report_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}

/// Top-level grammar: `mat [command] [args…]`. Everything after the command
/// token is handed to the command untouched, including `-`-prefixed tokens.
fn shell_signature(manager: &CommandManager) -> clap::Command {
    clap::Command::new("mat")
        .bin_name("mat")
        .about("Query MIME types and manage freedesktop.org default applications")
        .version(cli::VERSION)
        .arg(
            Arg::new("help-all")
                .long("help-all")
                .action(ArgAction::HelpLong)
                .help("Print help"),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .help("Command to execute"),
        )
        .arg(
            Arg::new("args")
                .value_name("ARGS")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Arguments passed to the command"),
        )
        .after_help(format!(
            "Available commands:\n{}",
            manager.descriptions_help_text()
        ))
}

fn dispatch(manager: &CommandManager, argv: &[String]) -> Result<(), MatError> {
    // The command token is located without clap so that everything after it
    // reaches the command's own parser untouched.
    if let Some(name) = argv.get(1).filter(|token| !token.starts_with('-')) {
        return run_command(manager, name, &argv[2..]);
    }

    let mut shell = shell_signature(manager);
    let matches = match cli::parse(&mut shell, argv) {
        ParseOutcome::Args(matches) => matches,
        ParseOutcome::Help(text) | ParseOutcome::Version(text) => {
            println!("{text}");
            return Ok(());
        }
        ParseOutcome::Error(text) => return Err(cli::usage_error(&text, &mut shell)),
    };

    // Reachable for a bare `mat` and for `mat -- command [args…]`.
    let Some(name) = matches.get_one::<String>("command") else {
        // Without a command the listing is the useful part, so fail with
        // the whole help text.
        return Err(MatError::Usage {
            text: shell.render_help().to_string().trim_end().to_owned(),
        });
    };
    let args: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    run_command(manager, name, &args)
}

fn run_command(manager: &CommandManager, name: &str, args: &[String]) -> Result<(), MatError> {
    let Some(command) = manager.find(name) else {
        let mut shell = shell_signature(manager);
        return Err(cli::usage_error(
            &format!("Unknown command '{name}'"),
            &mut shell,
        ));
    };
    let mut command_argv = vec![name.to_owned()];
    command_argv.extend(args.iter().cloned());
    command.run(&command_argv)
}
