//! Level catalog for Terminal Zero.
//!
//! Pure lookup over authored data: level metadata, per-level static file
//! systems, and track queries. No game logic lives here.

mod catalog;
mod filesystems;

use tzero_types::{Level, MAX_LEVEL, Result};
use tzero_vfs::LevelFs;

pub use catalog::level_data;
pub use filesystems::level_fs;

/// The six thematic tracks, in play order.
pub fn all_tracks() -> Vec<&'static str> {
    vec![
        "Terminal Basics",
        "Programming Logic",
        "Web Hacking",
        "Networking",
        "Cryptography",
        "Advanced Exploits",
    ]
}

/// All authored levels belonging to `track`, in ascending id order.
pub fn levels_by_track(track: &str) -> Vec<Level> {
    (1..=MAX_LEVEL)
        .map(level_data)
        .filter(|l| l.track == track)
        .collect()
}

/// Validate the whole catalog. Intended to run once at startup.
pub fn validate_catalog() -> Result<()> {
    for id in 1..=MAX_LEVEL {
        level_data(id).validate()?;
    }
    log::debug!("level catalog validated ({MAX_LEVEL} levels)");
    Ok(())
}

/// Convenience re-export so callers can fetch both halves of a level.
pub fn level_bundle(id: u32) -> (Level, LevelFs) {
    (level_data(id), level_fs(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        validate_catalog().unwrap();
    }

    #[test]
    fn every_level_has_metadata() {
        for id in 1..=MAX_LEVEL {
            let level = level_data(id);
            assert_eq!(level.id, id);
            assert!(!level.title.is_empty());
            assert!(!level.objectives.is_empty());
            assert!(!level.hints.is_empty());
        }
    }

    #[test]
    fn unauthored_level_gets_placeholder() {
        let level = level_data(99);
        assert_eq!(level.id, 99);
        assert_eq!(level.title, "Unknown Level");
    }

    #[test]
    fn level_one_reads_as_authored() {
        let level = level_data(1);
        assert_eq!(level.title, "First Steps");
        assert_eq!(level.track, "Terminal Basics");
    }

    #[test]
    fn tracks_cover_ten_levels_each() {
        // First two tracks are fully authored ranges (1-10, 11-20 minus
        // the cross-track levels 19 and 20).
        let basics = levels_by_track("Terminal Basics");
        assert_eq!(basics.len(), 10);
        assert!(basics.iter().all(|l| (1..=10).contains(&l.id)));
    }

    #[test]
    fn all_tracks_listed_in_order() {
        let tracks = all_tracks();
        assert_eq!(tracks.len(), 6);
        assert_eq!(tracks[0], "Terminal Basics");
        assert_eq!(tracks[5], "Advanced Exploits");
    }

    #[test]
    fn level_one_fs_has_secret() {
        let fs = level_fs(1);
        assert!(fs.root_file("secret.txt").unwrap().contains("f1rst_st3ps"));
    }

    #[test]
    fn level_six_fs_has_hidden_dir() {
        let fs = level_fs(6);
        assert!(fs.has_dir("/hidden"));
        assert!(
            fs.file("/hidden", "secret_file.txt")
                .unwrap()
                .contains("f0und_1t")
        );
    }

    #[test]
    fn level_eight_fs_has_eight_root_entries() {
        let fs = level_fs(8);
        // file1.txt through file5.txt plus readme, hint, and commands.
        assert_eq!(fs.dir("/").unwrap().len(), 8);
    }

    #[test]
    fn unauthored_fs_gets_placeholder() {
        let fs = level_fs(42);
        assert_eq!(
            fs.root_file("readme.txt"),
            Some("This level has not been implemented yet.")
        );
    }

    #[test]
    fn bundle_returns_matching_halves() {
        let (level, fs) = level_bundle(10);
        assert_eq!(level.id, 10);
        assert!(fs.root_file("script.js").unwrap().contains("a - b"));
    }
}
