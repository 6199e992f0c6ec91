//! Command interpreter: trait, registry, and the dispatch loop.
//!
//! Every line of terminal input flows through [`Interpreter::process`],
//! which is total: any input, including malformed or unknown commands,
//! produces exactly one [`CommandResult`].

use std::collections::HashMap;

use tzero_types::{CommandResult, Level, MAX_LEVEL, Result};
use tzero_vfs::LevelFs;

use crate::pipeline;
use crate::rules;
use crate::session::Session;

/// Everything a command handler can see and touch for one dispatch.
pub struct Environment<'a> {
    /// Active level id.
    pub level: u32,
    /// Metadata for the active level.
    pub level_data: &'a Level,
    /// The level's static read-only file system.
    pub level_fs: &'a LevelFs,
    /// The raw input line, untokenized.
    pub raw: &'a str,
    /// Mutable session state.
    pub session: &'a mut Session,
}

/// A built-in terminal command.
pub trait Command: Send + Sync {
    /// Verb the player types, lowercase.
    fn name(&self) -> &str;

    /// One-line description shown by `help`.
    fn description(&self) -> &str;

    /// Handle `args` (everything after the verb) against `env`.
    ///
    /// Wrong or missing arguments are ordinary outcomes and come back as
    /// `Ok` with guidance text. `Err` is reserved for unexpected internal
    /// failures.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult>;
}

/// Name -> handler table for the built-in commands.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its own name. Later registrations replace
    /// earlier ones.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name().to_string();
        log::debug!("registry: registered command '{name}'");
        self.commands.insert(name, command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| &**command)
    }

    /// (name, description) pairs sorted by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        entries.sort_by_key(|&(name, _)| name);
        entries
    }

    /// Build the `help` output for the active level.
    ///
    /// `help` is handled here rather than as a registered command because
    /// it needs to read the registry itself.
    pub fn help(&self, raw: &str, level_data: &Level) -> CommandResult {
        let mut out = String::from("Available commands:\n");
        out.push_str("  help - Show this help message\n");
        for (name, description) in self.list() {
            // Script execution is listed as a pattern, not a literal name.
            if name.starts_with("./") {
                continue;
            }
            out.push_str(&format!("  {name} - {description}\n"));
        }
        out.push_str("  ./[filename] - Execute a script\n");

        out.push_str(&format!(
            "\nLevel {}: {}\n{}\n",
            level_data.id, level_data.title, level_data.description
        ));
        if !level_data.objectives.is_empty() {
            out.push_str("\nObjectives:\n");
            for objective in &level_data.objectives {
                out.push_str(&format!("- {objective}\n"));
            }
        }
        if let Some(hint) = level_hint(level_data.id) {
            out.push('\n');
            out.push_str(hint);
        }

        // Easter egg: the moderator section only shows up when asked for.
        if raw.contains("--mod") || raw.contains("--admin") {
            out.push_str("\n[MODERATOR COMMANDS]\n");
            out.push_str("  mod_skip [level] - Skip to a specific level\n");
            out.push_str("  !skip [level] - Alternative syntax to skip to a level\n");
        }

        CommandResult::text(out)
    }
}

/// Extra help paragraphs for levels whose challenge spans several commands.
fn level_hint(level: u32) -> Option<&'static str> {
    match level {
        3 => Some(
            "Hint: Files have permissions that control who can read, write, or execute them.\nUse 'chmod +r locked.txt' to add read permissions to the file.\nThen use 'cat locked.txt' to read its contents.\n",
        ),
        4 => Some(
            "Hint: Scripts need to be executable before they can be run.\nUse 'chmod +x script.sh' to make the script executable.\nThen run the script with './script.sh'.\n",
        ),
        5 => Some(
            "Hint: Use 'tar -xzf backup.tar.gz' to extract the archive.\nThe -x flag extracts, -z handles gzip compression, and -f specifies the file.\nAfter extraction, use 'cat password.txt' to read any extracted files.\n",
        ),
        8 => Some(
            "Hint: Use the pipe (|) symbol to chain commands together. For example: ls | wc -l\nThis will list files and count the number of lines in the output.\n",
        ),
        10 => Some(
            "Hint: Use 'sudo edit script.js' to edit the script file with elevated permissions.\nLook for the bug in the add function (it's subtracting instead of adding).\nFix the function by changing 'return a - b' to 'return a + b'.\nUse 'save' to save your changes and 'exit' to exit the editor.\nThen run the fixed script with 'node script.js'.\n",
        ),
        11 => Some(
            "Hint: Use 'sudo edit array.js' to edit the script file.\nAdd the line 'numbers.reverse();' to reverse the array.\nUse 'save' to save your changes and 'exit' to exit the editor.\nThen run the script with 'node array.js'.\n",
        ),
        12 => Some(
            "Hint: Create a script that uses JSON.parse() to read data.json.\nUse 'cat data.json' to see the content, then 'edit parse.js' to create your script.\nYour script should extract the admin password from the users array.\n",
        ),
        13 => Some(
            "Hint: Create a script that uses regular expressions to extract patterns.\nUse 'cat text.txt' to see the content, then 'edit regex.js' to create your script.\nYour script should extract email addresses and phone numbers.\n",
        ),
        _ => None,
    }
}

/// The interpreter: a registry plus one session.
pub struct Interpreter {
    registry: CommandRegistry,
    session: Session,
}

impl Interpreter {
    /// Interpreter with all built-in commands registered and a fresh session.
    pub fn new() -> Self {
        let mut registry = CommandRegistry::new();
        crate::commands::register_builtins(&mut registry);
        Self {
            registry,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process one raw input line against the active level.
    ///
    /// Never fails: internal errors are logged and folded into the result
    /// text so the terminal always has something to print.
    pub fn process(&mut self, raw: &str, level: u32, level_data: &Level) -> CommandResult {
        self.session.push_history(raw);
        match self.dispatch(raw, level, level_data) {
            Ok(result) => result,
            Err(e) => {
                log::error!("command dispatch failed for {raw:?}: {e}");
                CommandResult::text(format!(
                    "An error occurred while processing your command: {e}"
                ))
            }
        }
    }

    fn dispatch(&mut self, raw: &str, level: u32, level_data: &Level) -> Result<CommandResult> {
        // Pipelines are matched on the raw line, before tokenization.
        if raw.contains('|') {
            return Ok(pipeline::handle(raw, level));
        }

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return Ok(CommandResult::text(""));
        };
        let verb = first.to_lowercase();
        let args = &tokens[1..];

        if verb == "mod_skip" || verb == "!skip" {
            return Ok(moderator_skip(args));
        }
        if verb == "help" {
            return Ok(self.registry.help(raw, level_data));
        }

        let level_fs = tzero_levels::level_fs(level);
        let mut env = Environment {
            level,
            level_data,
            level_fs: &level_fs,
            raw,
            session: &mut self.session,
        };

        if let Some(command) = self.registry.get(&verb) {
            return command.execute(args, &mut env);
        }
        if let Some(result) = rules::check_completion(&verb, args, level) {
            return Ok(result);
        }

        Ok(CommandResult::text(format!(
            "Command not found: {verb}. Type 'help' to see available commands."
        )))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Hidden `mod_skip` / `!skip` handler.
fn moderator_skip(args: &[&str]) -> CommandResult {
    let target = args.first().and_then(|a| a.parse::<u32>().ok());
    match target {
        Some(n) if (1..=MAX_LEVEL).contains(&n) => {
            log::info!("moderator skip to level {n}");
            CommandResult::skip(format!("[MODERATOR COMMAND] Skipping to level {n}..."), n)
        }
        _ => CommandResult::text(
            "[MODERATOR COMMAND] Invalid level number. Usage: mod_skip [level_number] or !skip [level_number]",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(interp: &mut Interpreter, raw: &str, level: u32) -> CommandResult {
        let data = tzero_levels::level_data(level);
        interp.process(raw, level, &data)
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "frobnicate", 1);
        assert!(r.output.starts_with("Command not found: frobnicate"));
        assert!(r.output.contains("Type 'help'"));
        assert!(!r.level_completed);
    }

    #[test]
    fn verb_is_case_insensitive() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "CAT secret.txt", 1);
        assert!(r.level_completed);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "   ", 1);
        assert_eq!(r.output, "");
        assert!(!r.level_completed);
    }

    #[test]
    fn every_line_lands_in_history() {
        let mut interp = Interpreter::new();
        run(&mut interp, "ls", 1);
        run(&mut interp, "nonsense", 1);
        assert_eq!(interp.session().history(), ["ls", "nonsense"]);
    }

    #[test]
    fn mod_skip_in_range() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "mod_skip 42", 1);
        assert!(r.level_completed);
        assert_eq!(r.skip_to_level, Some(42));
        assert!(r.output.contains("Skipping to level 42"));
    }

    #[test]
    fn skip_alias_matches() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "!skip 2", 1);
        assert_eq!(r.skip_to_level, Some(2));
    }

    #[test]
    fn mod_skip_out_of_range_is_rejected() {
        let mut interp = Interpreter::new();
        for raw in ["mod_skip 0", "mod_skip 61", "mod_skip abc", "mod_skip"] {
            let r = run(&mut interp, raw, 1);
            assert!(r.output.contains("Invalid level number"), "input: {raw}");
            assert!(r.skip_to_level.is_none());
        }
    }

    #[test]
    fn help_lists_commands_and_level() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "help", 1);
        assert!(r.output.contains("Available commands:"));
        assert!(r.output.contains("ls - "));
        assert!(r.output.contains("Level 1: First Steps"));
        assert!(!r.output.contains("Moderator commands"));
    }

    #[test]
    fn help_mod_flag_reveals_moderator_commands() {
        let mut interp = Interpreter::new();
        let r = run(&mut interp, "help --mod", 1);
        assert!(r.output.contains("mod_skip [level]"));
        let r = run(&mut interp, "help --admin", 1);
        assert!(r.output.contains("!skip [level]"));
    }
}
