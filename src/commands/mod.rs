/// The mat commands and their registration order.
pub mod default_app;
pub mod mimetype;
pub mod open;

use crate::manager::CommandManager;

/// Register every command, in the order the command listing shows them.
pub fn register_all(manager: &mut CommandManager) {
    manager.add(Box::new(mimetype::MimeTypeCommand));
    manager.add(Box::new(open::OpenCommand));
    manager.add(Box::new(default_app::DefaultAppCommand::web_browser()));
    manager.add(Box::new(default_app::DefaultAppCommand::email_client()));
    manager.add(Box::new(default_app::DefaultAppCommand::file_manager()));
    manager.add(Box::new(default_app::DefaultAppCommand::terminal()));
}
