//! Built-in command handlers, grouped by concern.

mod file;
mod net;
mod script;
mod shell;

use crate::interpreter::CommandRegistry;

/// Register every built-in command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    file::register(registry);
    script::register(registry);
    net::register(registry);
    shell::register(registry);
}
