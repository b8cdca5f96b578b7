/// Registry owning the set of available sub-commands.
use std::fmt::Write;

use crate::command::Command;

/// Ordered collection of registered commands.
///
/// Insertion order is preserved and is also the help-rendering order; names
/// are assumed unique but not enforced. The manager owns its commands:
/// dropping it drops every registered command.
#[derive(Default)]
pub struct CommandManager {
    commands: Vec<Box<dyn Command>>,
}

impl CommandManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command, taking ownership of it.
    pub fn add(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Read-only view of the registered commands, in registration order.
    #[must_use]
    pub fn commands(&self) -> &[Box<dyn Command>] {
        &self.commands
    }

    /// Look up a command by name for dispatch.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&dyn Command> {
        self.commands()
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(AsRef::as_ref)
    }

    /// Render the two-column command listing for the top-level help text.
    ///
    /// Each line is two spaces, the command name left-justified so that the
    /// description column lines up two spaces past the longest name, and the
    /// one-line description. An empty manager renders an empty string.
    #[must_use]
    pub fn descriptions_help_text(&self) -> String {
        let longest = self
            .commands
            .iter()
            .map(|cmd| cmd.name().len())
            .max()
            .unwrap_or(0)
            + 2; // account for the two-space left margin
        let mut text = String::new();
        for cmd in &self.commands {
            let name = format!("  {}", cmd.name());
            let _ = writeln!(text, "{name:<longest$}  {}", cmd.description());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::MatError;

    struct StubCommand {
        name: &'static str,
        description: &'static str,
    }

    impl Command for StubCommand {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            self.description
        }

        fn run(&self, _argv: &[String]) -> Result<(), MatError> {
            Ok(())
        }
    }

    fn manager_with(names: &[(&'static str, &'static str)]) -> CommandManager {
        let mut manager = CommandManager::new();
        for (name, description) in names {
            manager.add(Box::new(StubCommand { name, description }));
        }
        manager
    }

    #[test]
    fn test_empty_manager_renders_empty_string() {
        assert_eq!(CommandManager::new().descriptions_help_text(), "");
    }

    #[test]
    fn test_listing_is_aligned_and_ordered() {
        let manager = manager_with(&[
            ("mimetype", "Determines a file (mime)type"),
            ("open", "Open files with the default application"),
        ]);
        let expected = concat!(
            "  mimetype  Determines a file (mime)type\n",
            "  open      Open files with the default application\n",
        );
        assert_eq!(manager.descriptions_help_text(), expected);
    }

    #[test]
    fn test_description_column_offset() {
        let manager = manager_with(&[
            ("a", "first"),
            ("abcdefgh", "second"),
            ("abc", "third"),
        ]);
        let text = manager.descriptions_help_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        // Description column starts at 2 + longest name + 2 on every line.
        let offset = 2 + "abcdefgh".len() + 2;
        for (line, description) in lines.iter().zip(["first", "second", "third"]) {
            assert!(line.starts_with("  "));
            assert_eq!(&line[offset..], description);
        }
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let manager = manager_with(&[("zeta", "z"), ("alpha", "a"), ("mid", "m")]);
        let names: Vec<&str> = manager.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);

        let rendered: Vec<String> = manager
            .descriptions_help_text()
            .lines()
            .map(|line| line.split_whitespace().next().unwrap().to_owned())
            .collect();
        assert_eq!(rendered, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_find_matches_by_name() {
        let manager = manager_with(&[("mimetype", "d"), ("open", "o")]);
        assert_eq!(manager.find("open").map(Command::name), Some("open"));
        assert!(manager.find("missing").is_none());
    }
}
