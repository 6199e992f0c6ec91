//! Error types for Terminal Zero.

use std::io;

/// Errors produced by the Terminal Zero engine and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum TzeroError {
    #[error("command error: {0}")]
    Command(String),

    #[error("file store error: {0}")]
    Store(String),

    #[error("level error: {0}")]
    Level(String),

    #[error("validator error: {0}")]
    Validator(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TzeroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display() {
        let e = TzeroError::Command("unknown verb".into());
        assert_eq!(format!("{e}"), "command error: unknown verb");
    }

    #[test]
    fn store_error_display() {
        let e = TzeroError::Store("file not found".into());
        assert_eq!(format!("{e}"), "file store error: file not found");
    }

    #[test]
    fn level_error_display() {
        let e = TzeroError::Level("no such level".into());
        assert_eq!(format!("{e}"), "level error: no such level");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TzeroError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: TzeroError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: TzeroError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }
}
