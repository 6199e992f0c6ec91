//! The result type every command dispatch produces.

use serde::{Deserialize, Serialize};

/// Highest level the game knows about. `skip_to_level` is bounded by this.
pub const MAX_LEVEL: u32 = 60;

/// Outcome of processing one line of terminal input.
///
/// The dispatcher is total: every input line maps to exactly one of these,
/// including malformed input and internal failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Narrative text shown in the terminal. May embed lightweight markup
    /// for colorization; the engine treats it as opaque.
    pub output: String,
    /// Whether this command finished the active level.
    pub level_completed: bool,
    /// Jump target for the hidden moderator commands.
    /// Invariant: `Some(_)` implies `level_completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_to_level: Option<u32>,
}

impl CommandResult {
    /// Plain output, level not completed.
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            level_completed: false,
            skip_to_level: None,
        }
    }

    /// Output that completes the active level.
    pub fn completed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            level_completed: true,
            skip_to_level: None,
        }
    }

    /// Moderator skip to `target`. Completes the level by definition.
    pub fn skip(output: impl Into<String>, target: u32) -> Self {
        Self {
            output: output.into(),
            level_completed: true,
            skip_to_level: Some(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_not_completed() {
        let r = CommandResult::text("hello");
        assert_eq!(r.output, "hello");
        assert!(!r.level_completed);
        assert!(r.skip_to_level.is_none());
    }

    #[test]
    fn completed_sets_flag() {
        let r = CommandResult::completed("done");
        assert!(r.level_completed);
        assert!(r.skip_to_level.is_none());
    }

    #[test]
    fn skip_implies_completed() {
        let r = CommandResult::skip("jumping", 42);
        assert!(r.level_completed);
        assert_eq!(r.skip_to_level, Some(42));
    }

    #[test]
    fn serializes_without_skip_field_when_none() {
        let json = serde_json::to_string(&CommandResult::text("hi")).unwrap();
        assert!(!json.contains("skip_to_level"));
    }

    #[test]
    fn round_trips_through_json() {
        let r = CommandResult::skip("go", 7);
        let json = serde_json::to_string(&r).unwrap();
        let back: CommandResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
