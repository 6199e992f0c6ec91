//! Shell utilities: echo, clear, env, export, wc.

use tzero_types::{CommandResult, Result};

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::session::LevelFlag;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(Echo));
    registry.register(Box::new(Clear));
    registry.register(Box::new(Env));
    registry.register(Box::new(Export));
    registry.register(Box::new(Wc));
}

struct Echo;

impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Display a line of text"
    }

    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::text(args.join(" ")))
    }
}

struct Clear;

impl Command for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Clear the terminal screen"
    }

    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        // The actual clearing is the front end's job.
        Ok(CommandResult::text("Terminal cleared"))
    }
}

const BASE_ENV: &str = "PATH=/usr/local/bin:/usr/bin:/bin\nHOME=/home/user\nUSER=hacker";

struct Env;

impl Command for Env {
    fn name(&self) -> &str {
        "env"
    }

    fn description(&self) -> &str {
        "Display environment variables"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if env.level == 9 {
            return Ok(CommandResult::completed(format!(
                "{BASE_ENV}\nSECRET=3nv1r0nm3nt4l\n\nWell done! You found the SECRET environment variable. Environment variables are used to store configuration and sensitive information."
            )));
        }
        if env.level == 59 && args.contains(&"grep") && args.contains(&"KEY") {
            return Ok(CommandResult::completed(
                "Environment variable found:\nDECRYPTION_KEY=r4ns0mw4r3_d3f34t3d",
            ));
        }

        let mut output = BASE_ENV.to_string();
        for (name, value) in env.session.vars() {
            output.push_str(&format!("\n{name}={value}"));
        }
        Ok(CommandResult::text(output))
    }
}

struct Export;

impl Command for Export {
    fn name(&self) -> &str {
        "export"
    }

    fn description(&self) -> &str {
        "Set an environment variable"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let Some(&assignment) = args.first() else {
            return Ok(CommandResult::text(
                "Usage: export NAME=VALUE\nSets an environment variable.\nExample: export DEBUG=true",
            ));
        };

        match assignment.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                env.session.set_var(name, value);
                Ok(CommandResult::text(format!(
                    "Environment variable {name} set to {value}"
                )))
            }
            _ => Ok(CommandResult::text(
                "Invalid export syntax. Use: export NAME=VALUE",
            )),
        }
    }
}

struct Wc;

impl Command for Wc {
    fn name(&self) -> &str {
        "wc"
    }

    fn description(&self) -> &str {
        "Count lines, words, and bytes"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if env.level == 8 && args.contains(&"-l") {
            if env.session.has_flag(8, LevelFlag::LsRun) {
                return Ok(CommandResult::text(
                    "You're on the right track! Now try chaining 'ls' and 'wc -l' with a pipe (|).\nExample: ls | wc -l",
                ));
            }
            return Ok(CommandResult::text(
                "You need to list the files first with 'ls' before counting them. Try 'ls' first, then 'wc -l', or chain them with 'ls | wc -l'.",
            ));
        }

        Ok(CommandResult::text(
            "Usage: wc [options] [file]\nTry 'wc -l' to count lines.",
        ))
    }
}
