//! Game configuration from an optional `tzero.toml`.

use serde::Deserialize;

use tzero_types::{MAX_LEVEL, Result, TzeroError};

/// Runtime settings for the console front end.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Level to start at.
    #[serde(default = "default_start_level")]
    pub start_level: u32,
    /// Shell prompt shown before each input line.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_start_level() -> u32 {
    1
}

fn default_prompt() -> String {
    "hacker@tzero:~$ ".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_level: default_start_level(),
            prompt: default_prompt(),
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `tzero.toml` from the working directory, falling back to
    /// defaults when the file is absent.
    pub fn load() -> Result<Self> {
        match std::fs::read_to_string("tzero.toml") {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no tzero.toml found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.start_level == 0 || self.start_level > MAX_LEVEL {
            return Err(TzeroError::Config(format!(
                "start_level must be between 1 and {MAX_LEVEL}, got {}",
                self.start_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config.start_level, 1);
        assert_eq!(config.prompt, "hacker@tzero:~$ ");
    }

    #[test]
    fn parses_overrides() {
        let config = GameConfig::from_toml("start_level = 10\nprompt = \"$ \"\n").unwrap();
        assert_eq!(config.start_level, 10);
        assert_eq!(config.prompt, "$ ");
    }

    #[test]
    fn rejects_out_of_range_start_level() {
        assert!(GameConfig::from_toml("start_level = 0").is_err());
        assert!(GameConfig::from_toml("start_level = 61").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(GameConfig::from_toml("start_level = [").is_err());
    }
}
