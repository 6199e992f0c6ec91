//! Per-player session state.
//!
//! Everything a running game mutates lives here: hidden level flags, the
//! user file store, exported environment variables, and command history.
//! There is one `Session` per interpreter; nothing is global.

use std::collections::{BTreeMap, HashSet};

use tzero_vfs::FileStore;

/// Hidden per-level progress flags.
///
/// Flags gate multi-step challenges: a later command only succeeds after an
/// earlier command has set its flag. They are never shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelFlag {
    /// Level 3: `chmod` was run on `locked.txt`.
    PermissionsChanged,
    /// Level 4: `chmod +x` was run on `script.sh`.
    ScriptExecutable,
    /// Level 5: `tar -xzf backup.tar.gz` was run.
    ArchiveExtracted,
    /// Level 6: `find` located the hidden file.
    FileFound,
    /// Level 8: `ls` was run at least once.
    LsRun,
    /// Level 10: a fixed `script.js` was saved.
    ScriptEdited,
    /// Level 12: `data.json` was viewed with `cat`.
    DataJsonViewed,
    /// Level 13: `text.txt` was viewed with `cat`.
    TextFileViewed,
}

impl LevelFlag {
    fn as_str(self) -> &'static str {
        match self {
            Self::PermissionsChanged => "permissions_changed",
            Self::ScriptExecutable => "script_executable",
            Self::ArchiveExtracted => "archive_extracted",
            Self::FileFound => "file_found",
            Self::LsRun => "ls_run",
            Self::ScriptEdited => "script_edited",
            Self::DataJsonViewed => "data_json_viewed",
            Self::TextFileViewed => "text_file_viewed",
        }
    }
}

/// Mutable state for one player session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current directory. Declared but not enforced; every handler
    /// assumes root.
    pub cwd: String,
    /// User-created and user-edited files.
    pub files: FileStore,
    /// Flags keyed by (level, flag). Scoping by level means replaying a
    /// level never sees stale progress from another one.
    flags: HashSet<(u32, LevelFlag)>,
    /// Variables set with `export`. Sorted for stable `env` output.
    env_vars: BTreeMap<String, String>,
    /// Every raw line the player has entered, in order.
    history: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            cwd: "/".to_string(),
            files: FileStore::new(),
            flags: HashSet::new(),
            env_vars: BTreeMap::new(),
            history: Vec::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a hidden flag for `level`. Idempotent.
    pub fn set_flag(&mut self, level: u32, flag: LevelFlag) {
        if self.flags.insert((level, flag)) {
            log::debug!("session: level {level} flag set: {}", flag.as_str());
        }
    }

    pub fn has_flag(&self, level: u32, flag: LevelFlag) -> bool {
        self.flags.contains(&(level, flag))
    }

    /// Set an exported environment variable, replacing any previous value.
    pub fn set_var(&mut self, name: &str, value: &str) {
        self.env_vars.insert(name.to_string(), value.to_string());
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.env_vars.get(name).map(String::as_str)
    }

    /// All exported variables as (name, value), sorted by name.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.env_vars
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn push_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}
