use std::path::Path;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Application configuration, loaded from TOML.
///
/// Every section is optional; missing keys fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub kakao: KakaoConfig,
    pub actors: ActorConfig,
}

/// Settings for order confirmation messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KakaoConfig {
    /// Confirmation messages are only sent when this is on.
    pub login_enabled: bool,
    pub message_link: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    pub buffer_size: usize,
}

impl Default for KakaoConfig {
    fn default() -> Self {
        Self {
            login_enabled: false,
            message_link: "http://localhost:8080".to_string(),
        }
    }
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "actors.buffer_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.kakao.message_link.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "kakao.message_link".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(!config.kakao.login_enabled);
        assert_eq!(config.kakao.message_link, "http://localhost:8080");
        assert_eq!(config.actors.buffer_size, 32);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml_str("[kakao]\nlogin_enabled = true\n").unwrap();
        assert!(config.kakao.login_enabled);
        assert_eq!(config.kakao.message_link, "http://localhost:8080");
        assert_eq!(config.actors.buffer_size, 32);
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let result = AppConfig::from_toml_str("[actors]\nbuffer_size = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid { ref field, .. }) if field == "actors.buffer_size"));
    }

    #[test]
    fn test_malformed_toml() {
        let result = AppConfig::from_toml_str("[kakao\nlogin_enabled = true");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[kakao]\nlogin_enabled = true\nmessage_link = \"https://gift.example\"\n\n[actors]\nbuffer_size = 4").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert!(config.kakao.login_enabled);
        assert_eq!(config.kakao.message_link, "https://gift.example");
        assert_eq!(config.actors.buffer_size, 4);
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::from_file("/nonexistent/gift-order.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
