//! Virtual file storage for Terminal Zero.
//!
//! Two distinct stores, deliberately kept apart:
//!
//! - [`FileStore`] -- the session-owned, mutable store of files the user
//!   has created or edited (`save`/`edit`). One instance per session; the
//!   single source of truth for user content.
//! - [`LevelFs`] -- the level-authored, read-only directory/file table
//!   each level ships with. Built once by the catalog, never mutated.

pub mod level_fs;
pub mod store;

pub use level_fs::LevelFs;
pub use store::FileStore;
