use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

fn default_autoplay_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the blog data document
    pub data_path: String,
    /// Seconds between automatic carousel advances
    #[serde(default = "default_autoplay_secs")]
    pub autoplay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: "blog.json".to_string(),
            autoplay_secs: default_autoplay_secs(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".noticias-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config file, falling back to defaults when it is absent
    /// or unreadable.
    pub fn load() -> Config {
        let config_path = match Self::config_path() {
            Some(p) => p,
            None => return Config::default(),
        };

        if !config_path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_path, "blog.json");
        assert_eq!(config.autoplay_secs, 15);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "data_path": "datos/blog.json" }"#).expect("should parse");
        assert_eq!(config.data_path, "datos/blog.json");
        assert_eq!(config.autoplay_secs, 15);
    }
}
