//! The mutable per-session file store.
//!
//! A flat filename -> content map. The simulation has no real directory
//! tree for user files; names are whatever the user typed (`script.js`,
//! `notes.txt`). Contents are text because every producer and consumer in
//! the game speaks strings.

use std::collections::BTreeMap;

/// In-memory store of user-created and user-edited files.
///
/// Every handler that reads or writes user content goes through this type;
/// there is no second copy of the data anywhere in the session.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    /// BTreeMap so `list()` comes out sorted without extra work.
    files: BTreeMap<String, String>,
}

impl FileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a file, replacing any previous content.
    pub fn set(&mut self, filename: &str, content: impl Into<String>) {
        let content = content.into();
        log::debug!("file store: set {filename} ({} bytes)", content.len());
        self.files.insert(filename.to_string(), content);
    }

    /// Content of a file, if present.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files.get(filename).map(String::as_str)
    }

    /// Whether a file exists.
    pub fn exists(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    /// All filenames, sorted.
    pub fn list(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Remove a file. Returns `true` if it existed.
    pub fn delete(&mut self, filename: &str) -> bool {
        self.files.remove(filename).is_some()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = FileStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut store = FileStore::new();
        store.set("notes.txt", "hello");
        assert_eq!(store.get("notes.txt"), Some("hello"));
        assert!(store.exists("notes.txt"));
    }

    #[test]
    fn get_missing_is_none() {
        let store = FileStore::new();
        assert_eq!(store.get("ghost.txt"), None);
        assert!(!store.exists("ghost.txt"));
    }

    #[test]
    fn set_overwrites() {
        let mut store = FileStore::new();
        store.set("f", "old");
        store.set("f", "new");
        assert_eq!(store.get("f"), Some("new"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_existing() {
        let mut store = FileStore::new();
        store.set("f", "x");
        assert!(store.delete("f"));
        assert!(!store.exists("f"));
    }

    #[test]
    fn delete_missing_returns_false() {
        let mut store = FileStore::new();
        assert!(!store.delete("nope"));
    }

    #[test]
    fn list_is_sorted() {
        let mut store = FileStore::new();
        store.set("zebra.txt", "z");
        store.set("alpha.txt", "a");
        store.set("mid.txt", "m");
        assert_eq!(store.list(), vec!["alpha.txt", "mid.txt", "zebra.txt"]);
    }

    #[test]
    fn empty_content_is_stored() {
        let mut store = FileStore::new();
        store.set("empty", "");
        assert!(store.exists("empty"));
        assert_eq!(store.get("empty"), Some(""));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn set_then_get_round_trips(
                name in "[a-z0-9_.]{1,20}",
                content in ".{0,200}",
            ) {
                let mut store = FileStore::new();
                store.set(&name, content.clone());
                prop_assert_eq!(store.get(&name), Some(content.as_str()));
            }

            #[test]
            fn delete_then_not_exists(name in "[a-z0-9_.]{1,20}") {
                let mut store = FileStore::new();
                store.set(&name, "data");
                store.delete(&name);
                prop_assert!(!store.exists(&name));
            }

            #[test]
            fn len_matches_distinct_names(
                names in proptest::collection::btree_set("[a-z]{1,8}", 0..10)
            ) {
                let mut store = FileStore::new();
                for name in &names {
                    store.set(name, "x");
                }
                prop_assert_eq!(store.len(), names.len());
            }
        }
    }
}
