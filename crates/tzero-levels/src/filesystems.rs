//! Authored static file systems, one per level.
//!
//! These are the read-only directory tables the levels ship with. User
//! edits never land here; they go to the session's `FileStore`.

use tzero_vfs::LevelFs;

/// Static file system for `level`, or the placeholder for unauthored ids.
pub fn level_fs(level: u32) -> LevelFs {
    match level {
        1 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Welcome to Terminal Zero! This is your first challenge.",
            )
            .with_file(
                "/",
                "secret.txt",
                "Congratulations! You've completed level 1. The secret code is: f1rst_st3ps",
            )
            .with_file("/", "hint.txt", "Try using the 'cat' command to read files."),
        2 => LevelFs::new()
            .with_file("/", "readme.txt", "Level 2: Find the hidden file.")
            .with_file(
                "/",
                ".config",
                "Congratulations! You've found the hidden file. The secret code is: h1dd3n_f1l3s",
            )
            .with_file(
                "/",
                "hint.txt",
                "Hidden files start with a dot (.) and are not shown by default.",
            ),
        3 => LevelFs::new()
            .with_file("/", "readme.txt", "Level 3: Change file permissions.")
            .with_file(
                "/",
                "locked.txt",
                "Congratulations! You've changed the permissions. The secret code is: p3rm1ss10ns",
            )
            .with_file("/", "hint.txt", "Use chmod to change file permissions."),
        4 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 4: Make a script executable and run it.",
            )
            .with_file(
                "/",
                "script.sh",
                "#!/bin/bash\necho 'Hello, world!'\necho 'This is a bash script.'\necho 'Secret code: ex3cut4bl3'",
            )
            .with_file(
                "/",
                "hint.txt",
                "Use chmod +x to make a script executable, then run it with ./script.sh",
            ),
        5 => LevelFs::new()
            .with_file("/", "readme.txt", "Level 5: Extract an archive.")
            .with_file("/", "backup.tar.gz", "[Archive contents]")
            .with_file(
                "/",
                "hint.txt",
                "Use tar -xzf to extract a .tar.gz archive.",
            ),
        6 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 6: Find a hidden file somewhere in the system.",
            )
            .with_file(
                "/",
                "hint.txt",
                "Use the find command to search for files by name.",
            )
            .with_file(
                "/hidden",
                "secret_file.txt",
                "Congratulations! You've found the hidden file. The secret code is: f0und_1t",
            ),
        7 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 7: Search for a password in log files.",
            )
            .with_file(
                "/",
                "text.txt",
                "This file contains the word 'password' somewhere in it.",
            )
            .with_file(
                "/",
                "logs.txt",
                "2023-05-05 14:30:22 - User logged in with password: s3cretl0g",
            )
            .with_file("/", "hint.txt", "Use grep to search for text within files."),
        8 => LevelFs::new()
            .with_file("/", "readme.txt", "Level 8: Chain commands to count files.")
            .with_file("/", "file1.txt", "This is file 1")
            .with_file("/", "file2.txt", "This is file 2")
            .with_file("/", "file3.txt", "This is file 3")
            .with_file("/", "file4.txt", "This is file 4")
            .with_file("/", "file5.txt", "This is file 5")
            .with_file(
                "/",
                "hint.txt",
                "Use ls | wc -l to count the number of files.",
            )
            .with_file(
                "/",
                "commands.txt",
                "Try using the pipe symbol (|) to chain commands together.",
            ),
        9 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 9: Find a secret environment variable.",
            )
            .with_file(
                "/",
                "hint.txt",
                "Use the env command to display environment variables.",
            ),
        10 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 10: Fix a broken JavaScript function.",
            )
            .with_file(
                "/",
                "script.js",
                "function add(a, b) {\n  return a - b; // This is wrong, should be a + b\n}\n\nconsole.log(add(5, 3)); // Should output 8, but currently outputs 2",
            )
            .with_file(
                "/",
                "hint.txt",
                "Use sudo nano script.js to edit the file. The add function should add numbers, not subtract them.",
            ),
        11 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 11: JavaScript Arrays. Edit array.js to reverse the array.",
            )
            .with_file(
                "/",
                "array.js",
                "// JavaScript Array Manipulation\n\n// This script should reverse an array\nconst numbers = [1, 2, 3, 4, 5];\n\nconsole.log('Original array:', numbers);\n\n// TODO: Add code to reverse the array\n// Hint: Use the array.reverse() method\n\nconsole.log('Reversed array:', numbers);",
            )
            .with_file(
                "/",
                "hint.txt",
                "Use the array.reverse() method to reverse the array in place.",
            ),
        12 => LevelFs::new()
            .with_file("/", "readme.txt", "Level 12: Parse JSON data.")
            .with_file(
                "/",
                "data.json",
                "{\n  \"users\": [\n    {\"username\": \"guest\", \"password\": \"guest123\"},\n    {\"username\": \"admin\", \"password\": \"s3cur3!\"}\n  ]\n}",
            )
            .with_file(
                "/",
                "hint.txt",
                "Create a script to parse the JSON and extract the admin password.",
            )
            .with_file(
                "/",
                "parse.js",
                "// JavaScript JSON Parsing\n\n// This script should parse data.json and extract the admin password\nconst fs = require('fs');\n\n// TODO: Add code to read and parse data.json\n// Hint: Use fs.readFileSync and JSON.parse\n\n// TODO: Find the admin user and extract the password\n// Hint: Loop through the users array or use find()\n\nconsole.log('Admin password: '); // Add the password after this",
            ),
        13 => LevelFs::new()
            .with_file(
                "/",
                "readme.txt",
                "Level 13: Extract patterns using regular expressions.",
            )
            .with_file(
                "/",
                "text.txt",
                "Contact our admin at admin@example.com or call 555-123-4567 for support.",
            )
            .with_file(
                "/",
                "hint.txt",
                "Create a script that uses regular expressions to extract the email and phone number.",
            ),
        _ => LevelFs::new().with_file("/", "readme.txt", "This level has not been implemented yet."),
    }
}
