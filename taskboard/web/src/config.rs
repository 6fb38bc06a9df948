use serde::Deserialize;
use tracing::Level;

const EMBEDDED_CONFIG: &str = include_str!("../taskboard.toml");

/// Application settings, read from the TOML file compiled into the binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name shown next to the logo in the navigation bar
    pub brand: String,
    pub logo_url: String,
    /// Minimum level passed to the logger, e.g. "debug" or "warn"
    pub log_level: String,
    /// Question asked before every task is deleted
    pub delete_all_prompt: String,
    pub empty_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "Tasks CRUD".to_string(),
            logo_url: "https://flowbite.com/docs/images/logo.svg".to_string(),
            log_level: "info".to_string(),
            delete_all_prompt: "Do you want to delete all tasks?".to_string(),
            empty_message: "No tasks available. Please add a task.".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the embedded TOML file
    pub fn load() -> anyhow::Result<Self> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The configured log level, falling back to INFO when it cannot be parsed.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_loads() {
        let config = AppConfig::load().unwrap();

        assert_eq!(config.brand, "Tasks CRUD");
        assert_eq!(config.delete_all_prompt, "Do you want to delete all tasks?");
        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_toml(r#"brand = "My Board""#).unwrap();

        assert_eq!(config.brand, "My Board");
        assert_eq!(config.empty_message, AppConfig::default().empty_message);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };

        assert_eq!(config.log_level(), Level::INFO);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(AppConfig::from_toml("brand = ").is_err());
    }
}
