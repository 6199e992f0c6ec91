//! The read-only per-level file system.
//!
//! Each level ships a small directory table: path -> filename -> content.
//! The catalog builds one of these per level; handlers only ever read it.

use std::collections::BTreeMap;

/// A level's static directory/file table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelFs {
    dirs: BTreeMap<String, BTreeMap<String, String>>,
}

impl LevelFs {
    /// Create an empty file system (no directories, not even root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add a file under a directory path, creating the
    /// directory entry if needed.
    pub fn with_file(mut self, dir: &str, name: &str, content: &str) -> Self {
        self.dirs
            .entry(dir.to_string())
            .or_default()
            .insert(name.to_string(), content.to_string());
        self
    }

    /// Whether a directory path exists.
    pub fn has_dir(&self, dir: &str) -> bool {
        self.dirs.contains_key(dir)
    }

    /// Filenames in a directory, sorted. `None` when the directory does
    /// not exist (distinct from an empty directory).
    pub fn dir(&self, dir: &str) -> Option<Vec<&str>> {
        self.dirs
            .get(dir)
            .map(|files| files.keys().map(String::as_str).collect())
    }

    /// Content of a file in a directory.
    pub fn file(&self, dir: &str, name: &str) -> Option<&str> {
        self.dirs.get(dir)?.get(name).map(String::as_str)
    }

    /// Content of a file in the root directory. Most handlers assume root.
    pub fn root_file(&self, name: &str) -> Option<&str> {
        self.file("/", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LevelFs {
        LevelFs::new()
            .with_file("/", "readme.txt", "Welcome.")
            .with_file("/", "secret.txt", "code: f1rst_st3ps")
            .with_file("/hidden", "secret_file.txt", "found it")
    }

    #[test]
    fn root_lookup() {
        let fs = sample();
        assert_eq!(fs.root_file("secret.txt"), Some("code: f1rst_st3ps"));
        assert_eq!(fs.root_file("missing.txt"), None);
    }

    #[test]
    fn nested_dir_lookup() {
        let fs = sample();
        assert_eq!(fs.file("/hidden", "secret_file.txt"), Some("found it"));
        assert!(fs.has_dir("/hidden"));
        assert!(!fs.has_dir("/nope"));
    }

    #[test]
    fn dir_listing_is_sorted() {
        let fs = sample();
        assert_eq!(fs.dir("/"), Some(vec!["readme.txt", "secret.txt"]));
    }

    #[test]
    fn missing_dir_is_none_not_empty() {
        let fs = sample();
        assert_eq!(fs.dir("/absent"), None);
    }

    #[test]
    fn empty_fs_has_no_root() {
        let fs = LevelFs::new();
        assert!(!fs.has_dir("/"));
        assert_eq!(fs.root_file("anything"), None);
    }

    #[test]
    fn with_file_overwrites_same_name() {
        let fs = LevelFs::new()
            .with_file("/", "a.txt", "one")
            .with_file("/", "a.txt", "two");
        assert_eq!(fs.root_file("a.txt"), Some("two"));
    }
}
