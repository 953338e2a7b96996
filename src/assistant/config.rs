use crate::error::{BotError, Result};
use crate::render::DEFAULT_BOX_WIDTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "Enter a command: ";
const DEFAULT_WELCOME: &str = "Welcome to the assistant bot!";
pub const MIN_BOX_WIDTH: usize = 40;
pub const MAX_BOX_WIDTH: usize = 1000;

/// Configuration for the bot, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotConfig {
    /// Inner width of the contacts and help boxes, in display columns
    #[serde(default = "default_box_width")]
    pub box_width: usize,

    /// Shown before every line of input
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default = "default_welcome")]
    pub welcome: String,
}

fn default_box_width() -> usize {
    DEFAULT_BOX_WIDTH
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_welcome() -> String {
    DEFAULT_WELCOME.to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            box_width: default_box_width(),
            prompt: default_prompt(),
            welcome: default_welcome(),
        }
    }
}

impl BotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BotConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOX_WIDTH..=MAX_BOX_WIDTH).contains(&self.box_width) {
            return Err(BotError::Config(format!(
                "box_width must be between {} and {}, got {}",
                MIN_BOX_WIDTH, MAX_BOX_WIDTH, self.box_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BotConfig::default();
        assert_eq!(config.box_width, 120);
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.welcome, "Welcome to the assistant bot!");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BotConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let config = BotConfig {
            box_width: 80,
            ..BotConfig::default()
        };
        config.save(&nested).unwrap();

        let loaded = BotConfig::load(&nested).unwrap();
        assert_eq!(loaded.box_width, 80);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"prompt": "> "}"#).unwrap();

        let loaded = BotConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.prompt, "> ");
        assert_eq!(loaded.box_width, 120);
    }

    #[test]
    fn test_narrow_box_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"box_width": 10}"#).unwrap();

        assert!(matches!(
            BotConfig::load(temp_dir.path()),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn test_wide_box_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"box_width": 1000000000}"#,
        )
        .unwrap();

        assert!(matches!(
            BotConfig::load(temp_dir.path()),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn test_width_bounds_are_inclusive() {
        for box_width in [MIN_BOX_WIDTH, MAX_BOX_WIDTH] {
            let config = BotConfig {
                box_width,
                ..BotConfig::default()
            };
            assert!(config.validate().is_ok());
        }
        let too_wide = BotConfig {
            box_width: MAX_BOX_WIDTH + 1,
            ..BotConfig::default()
        };
        assert!(matches!(too_wide.validate(), Err(BotError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            BotConfig::load(temp_dir.path()),
            Err(BotError::Serialization(_))
        ));
    }
}
