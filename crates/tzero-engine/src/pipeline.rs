//! Pipe handling.
//!
//! The simulation recognizes one pipeline, the level 8 `ls | wc` chain.
//! Everything else with a `|` in it gets a gentle redirect. There is no
//! general pipe executor and no output is threaded between commands.

use tzero_types::CommandResult;

/// Handle a raw input line containing at least one `|`.
pub fn handle(raw: &str, level: u32) -> CommandResult {
    let (first, second) = match raw.split_once('|') {
        Some((a, b)) => (a.trim(), b.trim()),
        None => (raw.trim(), ""),
    };

    if level == 8 && first == "ls" && second.starts_with("wc") {
        log::debug!("level 8 pipe chain matched");
        return CommandResult::completed(
            "Command chaining successful! The directory contains 7 files.\n\nExcellent! You've learned how to use pipes to chain commands together. This is a powerful technique for combining simple commands to perform complex tasks.",
        );
    }

    CommandResult::text(
        "Pipe command not fully implemented for this scenario. Try a different approach.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_eight_ls_wc_completes() {
        let r = handle("ls | wc -l", 8);
        assert!(r.level_completed);
        assert!(r.output.contains("7 files"));
    }

    #[test]
    fn bare_wc_after_pipe_still_matches() {
        let r = handle("ls | wc", 8);
        assert!(r.level_completed);
    }

    #[test]
    fn extra_spaces_around_pipe_are_fine() {
        let r = handle("ls   |   wc -l", 8);
        assert!(r.level_completed);
    }

    #[test]
    fn wrong_level_does_not_complete() {
        let r = handle("ls | wc -l", 7);
        assert!(!r.level_completed);
        assert!(r.output.contains("not fully implemented"));
    }

    #[test]
    fn ls_with_flags_does_not_match() {
        // The first segment must be exactly `ls`.
        let r = handle("ls -a | wc -l", 8);
        assert!(!r.level_completed);
    }

    #[test]
    fn other_pipes_get_the_generic_reply() {
        let r = handle("cat logs.txt | grep password", 7);
        assert!(!r.level_completed);
    }
}
