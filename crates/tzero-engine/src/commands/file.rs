//! File-oriented commands: ls, cat, chmod, find, grep, tar, edit, sudo,
//! and the editor's save transport.

use tzero_types::{CommandResult, Result};

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::session::LevelFlag;
use crate::transport;

pub fn register(registry: &mut CommandRegistry) {
    registry.register(Box::new(Ls));
    registry.register(Box::new(Cat));
    registry.register(Box::new(Chmod));
    registry.register(Box::new(Find));
    registry.register(Box::new(Grep));
    registry.register(Box::new(Tar));
    registry.register(Box::new(Save));
    registry.register(Box::new(Edit));
    registry.register(Box::new(Sudo));
}

struct Ls;

impl Command for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn description(&self) -> &str {
        "List files in the current directory"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if env.level == 8 {
            env.session.set_flag(8, LevelFlag::LsRun);
        }

        let show_hidden = args.contains(&"-a") || args.contains(&"--all");
        let show_details = args.contains(&"-l");

        // Last non-flag argument wins as the path.
        let mut path = "/";
        for arg in args {
            if !arg.starts_with('-') {
                path = arg;
            }
        }

        let fs = env.level_fs;
        let Some(names) = fs.dir(path) else {
            return Ok(CommandResult::text(format!(
                "ls: cannot access '{path}': No such file or directory"
            )));
        };

        let mut files: Vec<String> = names
            .into_iter()
            .filter(|name| show_hidden || !name.starts_with('.'))
            .map(str::to_string)
            .collect();

        // The level 5 archive materializes its content after extraction.
        if env.level == 5 && path == "/" && env.session.has_flag(5, LevelFlag::ArchiveExtracted) {
            files.push("password.txt".to_string());
        }

        if show_details {
            let mut output = format!("total {}\n", files.len());
            for file in &files {
                let permissions = if env.level == 3 && file == "locked.txt" {
                    "-rw-------"
                } else if env.level == 4 && file == "script.sh" {
                    if env.session.has_flag(4, LevelFlag::ScriptExecutable) {
                        "-rwxr-xr-x"
                    } else {
                        "-rw-r--r--"
                    }
                } else {
                    "drwxr-xr-x"
                };
                output.push_str(&format!(
                    "{permissions} 1 user group 4096 May 5 14:30 {file}\n"
                ));
            }
            Ok(CommandResult::text(output))
        } else {
            Ok(CommandResult::text(files.join("\n")))
        }
    }
}

struct Cat;

impl Command for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> &str {
        "Display the contents of a file"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let Some(&filename) = args.first() else {
            return Ok(CommandResult::text(
                "Usage: cat [filename]\nDisplays the contents of a file.",
            ));
        };

        // User edits shadow the level's static files.
        if let Some(content) = env.session.files.get(filename) {
            return Ok(CommandResult::text(content.to_string()));
        }

        let fs = env.level_fs;

        if filename.starts_with("/hidden/") {
            if env.level == 6 && filename == "/hidden/secret_file.txt" {
                if !env.session.has_flag(6, LevelFlag::FileFound) {
                    return Ok(CommandResult::text(
                        "You need to find the file first using the 'find' command before you can read it.",
                    ));
                }
                if let Some(content) = fs.file("/hidden", "secret_file.txt") {
                    return Ok(CommandResult::completed(format!(
                        "{content}\n\nExcellent! You've successfully found and read the hidden file."
                    )));
                }
            }
        }

        if env.level == 5 && filename == "password.txt" {
            if !env.session.has_flag(5, LevelFlag::ArchiveExtracted) {
                return Ok(CommandResult::text(
                    "cat: password.txt: No such file or directory\n\nYou need to extract the archive first using 'tar -xzf backup.tar.gz'.",
                ));
            }
            return Ok(CommandResult::completed(
                "The password is: arch1v3d\n\nGreat job! You've successfully extracted the archive and read the password file. This demonstrates how to work with compressed archives in Linux.",
            ));
        }

        let Some(content) = fs.root_file(filename) else {
            return Ok(CommandResult::text(format!(
                "cat: {filename}: No such file or directory"
            )));
        };

        match (env.level, filename) {
            (1, "secret.txt") => Ok(CommandResult::completed(format!(
                "{content}\n\nGreat job! You've learned how to read files using the 'cat' command."
            ))),
            (2, ".config") => Ok(CommandResult::completed(format!(
                "{content}\n\nWell done! You've discovered how to view hidden files that start with a dot."
            ))),
            (3, "locked.txt") => {
                if !env.session.has_flag(3, LevelFlag::PermissionsChanged) {
                    return Ok(CommandResult::text(
                        "cat: locked.txt: Permission denied\n\nYou need to change the file permissions first using 'chmod +r locked.txt'.",
                    ));
                }
                Ok(CommandResult::completed(format!(
                    "{content}\n\nExcellent! You've successfully changed the file permissions and read the file."
                )))
            }
            (12, "data.json") => {
                env.session.set_flag(12, LevelFlag::DataJsonViewed);
                Ok(CommandResult::text(format!(
                    "{content}\n\nNow you can see the JSON structure. Create a script to parse this data using 'edit parse.js'."
                )))
            }
            (13, "text.txt") => {
                env.session.set_flag(13, LevelFlag::TextFileViewed);
                Ok(CommandResult::text(format!(
                    "{content}\n\nNow you can see the text containing patterns. Create a script to extract them using 'edit regex.js'."
                )))
            }
            _ => Ok(CommandResult::text(content.to_string())),
        }
    }
}

struct Chmod;

impl Command for Chmod {
    fn name(&self) -> &str {
        "chmod"
    }

    fn description(&self) -> &str {
        "Change file permissions"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let [permissions, filename, ..] = args else {
            return Ok(CommandResult::text(
                "Usage: chmod [permissions] [filename]\nChanges the permissions of a file.\nExample: chmod +x script.sh",
            ));
        };

        if env.level_fs.root_file(filename).is_none() {
            return Ok(CommandResult::text(format!(
                "chmod: cannot access '{filename}': No such file or directory"
            )));
        }

        if env.level == 3
            && *filename == "locked.txt"
            && (*permissions == "+r" || *permissions == "644")
        {
            env.session.set_flag(3, LevelFlag::PermissionsChanged);
            return Ok(CommandResult::text(format!(
                "Changed permissions of '{filename}' to allow reading.\nNow you can use 'cat locked.txt' to read the file."
            )));
        }
        if env.level == 4
            && *filename == "script.sh"
            && (*permissions == "+x" || *permissions == "755")
        {
            env.session.set_flag(4, LevelFlag::ScriptExecutable);
            return Ok(CommandResult::text(format!(
                "Changed permissions of '{filename}' to allow execution.\nNow you can run the script with './script.sh'"
            )));
        }

        Ok(CommandResult::text(format!(
            "chmod: changed permissions of '{filename}'"
        )))
    }
}

struct Find;

impl Command for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn description(&self) -> &str {
        "Search for files"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if env.level == 6 {
            if args.contains(&"/") && (args.contains(&"-name") || args.contains(&"secret")) {
                env.session.set_flag(6, LevelFlag::FileFound);
                return Ok(CommandResult::text(
                    "/hidden/secret_file.txt\n\nGreat! You found the hidden file. Now use 'cat /hidden/secret_file.txt' to read its contents.",
                ));
            }
            if args.is_empty() {
                return Ok(CommandResult::text(
                    "Usage: find [path] -name [pattern]\nSearches for files matching a pattern.\nExample: find / -name secret*",
                ));
            }
        }

        Ok(CommandResult::text(
            "No matching files found. Try using 'find / -name secret*' to search for files with 'secret' in their name.",
        ))
    }
}

struct Grep;

impl Command for Grep {
    fn name(&self) -> &str {
        "grep"
    }

    fn description(&self) -> &str {
        "Search for patterns in files"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if args.len() < 2 {
            return Ok(CommandResult::text(
                "Usage: grep [pattern] [filename]\nSearches for a pattern in a file.\nExample: grep password logs.txt",
            ));
        }

        if env.level == 7 {
            if args.contains(&"password") && (args.contains(&"*") || args.contains(&"text.txt")) {
                return Ok(CommandResult::text(
                    "text.txt:This file contains the word 'password' somewhere in it.\n\nGood start! Now try searching in other files like logs.txt.",
                ));
            }
            if args.contains(&"password") && args.contains(&"logs.txt") {
                return Ok(CommandResult::completed(
                    "logs.txt:2023-05-05 14:30:22 - User logged in with password: s3cretl0g\n\nExcellent! You found the password in the logs file. This demonstrates how grep can be used to find specific information in files.",
                ));
            }
        }

        Ok(CommandResult::text(
            "No matches found. Try searching for 'password' in different files.",
        ))
    }
}

struct Tar;

impl Command for Tar {
    fn name(&self) -> &str {
        "tar"
    }

    fn description(&self) -> &str {
        "Work with tar archives"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if env.level == 5 && args.contains(&"-xzf") && args.contains(&"backup.tar.gz") {
            env.session.set_flag(5, LevelFlag::ArchiveExtracted);
            return Ok(CommandResult::text(
                "Extracting backup.tar.gz...\nExtracted files:\npassword.txt\n\nGreat! You've extracted the archive. Now use 'cat password.txt' to read its contents.",
            ));
        }

        Ok(CommandResult::text(
            "Usage: tar -xzf [archive.tar.gz]\nExtracts files from a gzipped tar archive.\nExample: tar -xzf backup.tar.gz",
        ))
    }
}

/// Transport command the editor front end emits on save. The content
/// arrives base64-encoded so it survives whitespace tokenization.
struct Save;

impl Command for Save {
    fn name(&self) -> &str {
        "save"
    }

    fn description(&self) -> &str {
        "Save a file from the editor"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let [filename, payload @ ..] = args else {
            return Ok(CommandResult::text("Invalid save command format"));
        };
        if payload.is_empty() {
            return Ok(CommandResult::text("Invalid save command format"));
        }

        let content = transport::decode_content(&payload.join(" "));
        env.session.files.set(filename, content.clone());

        // Saving the fixed script unlocks level 10's node run.
        if env.level == 10 && *filename == "script.js" && content.contains("return a + b") {
            env.session.set_flag(10, LevelFlag::ScriptEdited);
        }

        Ok(CommandResult::text(format!(
            "File {filename} saved successfully."
        )))
    }
}

struct Edit;

impl Command for Edit {
    fn name(&self) -> &str {
        "edit"
    }

    fn description(&self) -> &str {
        "Edit a file"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        match args.first() {
            Some(filename) => open_editor(filename, env),
            None => Ok(CommandResult::text("Usage: edit [filename]")),
        }
    }
}

struct Sudo;

impl Command for Sudo {
    fn name(&self) -> &str {
        "sudo"
    }

    fn description(&self) -> &str {
        "Run a command with elevated privileges"
    }

    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        // Only `sudo edit` is meaningful in the simulation.
        match args {
            ["edit", filename, ..] => open_editor(filename, env),
            _ => Ok(CommandResult::text("Usage: sudo [command]")),
        }
    }
}

const PARSE_TEMPLATE: &str = "// Create a script to parse data.json and extract the admin password\n// Hint: Use JSON.parse() and fs.readFileSync()\n\nconst fs = require('fs');\n\n// Your code here\n// 1. Read the data.json file\n// 2. Parse the JSON\n// 3. Find the admin user\n// 4. Extract and print the password\n";

const REGEX_TEMPLATE: &str = "// Create a script to extract email and phone number using regex\n// Hint: Use regular expressions with pattern.exec() or string.match()\n\nconst fs = require('fs');\n\n// Your code here\n// 1. Read the text.txt file\n// 2. Create regex patterns for email and phone\n// 3. Extract and print the matches\n";

const ARRAY_TEMPLATE: &str = "// Create a script that reverses an array\n// 1. Define an array with some elements\n// 2. Print the original array\n// 3. Use the array.reverse() method to reverse it\n// 4. Print the reversed array\n\n// Example:\nconst numbers = [1, 2, 3, 4, 5];\nconsole.log('Original array:', numbers);\n// TODO: Add code to reverse the array using numbers.reverse()\nconsole.log('Reversed array:', numbers);\n";

/// Shared by `edit` and `sudo edit`: return the editor's initial buffer.
fn open_editor(filename: &str, env: &mut Environment<'_>) -> Result<CommandResult> {
    let fs = env.level_fs;

    let initial = if let Some(content) = env.session.files.get(filename) {
        content.to_string()
    } else if let Some(content) = fs.root_file(filename) {
        content.to_string()
    } else if env.level == 12 && filename == "parse.js" {
        if !env.session.has_flag(12, LevelFlag::DataJsonViewed) {
            return Ok(CommandResult::text(
                "You should first view the data.json file with 'cat data.json' to understand its structure before creating a script to parse it.",
            ));
        }
        PARSE_TEMPLATE.to_string()
    } else if env.level == 13 && filename == "regex.js" {
        if !env.session.has_flag(13, LevelFlag::TextFileViewed) {
            return Ok(CommandResult::text(
                "You should first view the text.txt file with 'cat text.txt' to see what patterns you need to extract before creating a regex script.",
            ));
        }
        REGEX_TEMPLATE.to_string()
    } else if env.level == 11 && filename == "array.js" {
        ARRAY_TEMPLATE.to_string()
    } else {
        String::new()
    };

    if env.level == 10 && filename == "script.js" {
        return Ok(CommandResult::text(format!(
            "{initial}\n\nHint: The add function has a bug. It should add numbers, not subtract them."
        )));
    }

    Ok(CommandResult::text(initial))
}
