//! Level metadata as supplied by the level catalog.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TzeroError};

/// One self-contained puzzle stage.
///
/// Read-only for the engine: handlers consult the metadata (mostly for
/// `help` text) but the completion logic lives in the engine, not here.
/// `success_condition` is descriptive only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Thematic grouping of ten consecutive levels.
    pub track: String,
    pub objectives: Vec<String>,
    pub hints: Vec<String>,
    /// Advisory command list for help text; the dispatcher does not
    /// enforce it.
    pub commands: Vec<String>,
    pub success_condition: String,
}

impl Level {
    /// Build a level from static catalog data.
    pub fn new(
        id: u32,
        title: &str,
        description: &str,
        track: &str,
        objectives: &[&str],
        hints: &[&str],
        commands: &[&str],
        success_condition: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            track: track.to_string(),
            objectives: objectives.iter().map(|s| s.to_string()).collect(),
            hints: hints.iter().map(|s| s.to_string()).collect(),
            commands: commands.iter().map(|s| s.to_string()).collect(),
            success_condition: success_condition.to_string(),
        }
    }

    /// Validate catalog invariants. Called once at load time.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(TzeroError::Level("level id must be positive".to_string()));
        }
        if self.title.is_empty() {
            return Err(TzeroError::Level(format!(
                "level {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Level {
        Level::new(
            1,
            "First Steps",
            "Read a file.",
            "Terminal Basics",
            &["Use cat"],
            &["Type 'cat secret.txt'"],
            &["help", "ls", "cat", "clear"],
            "Read the contents of secret.txt",
        )
    }

    #[test]
    fn new_copies_all_fields() {
        let l = sample();
        assert_eq!(l.id, 1);
        assert_eq!(l.track, "Terminal Basics");
        assert_eq!(l.objectives.len(), 1);
        assert_eq!(l.commands, vec!["help", "ls", "cat", "clear"]);
    }

    #[test]
    fn validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_id() {
        let mut l = sample();
        l.id = 0;
        assert!(l.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut l = sample();
        l.title.clear();
        assert!(l.validate().is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let l = sample();
        let json = serde_json::to_string(&l).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }
}
