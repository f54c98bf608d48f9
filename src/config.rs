//! User configuration loaded from `config.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::input::KeyMap;

/// Name of the directory under the platform config dir.
const APP_DIR: &str = "keycalc";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from the config file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset, e.g. `"debug"`.
    pub log_level: Option<String>,
    /// Extra key bindings, from a single character to an event name.
    pub keys: BTreeMap<String, String>,
}

impl Config {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the config from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Build the key map with this config's bindings applied.
    pub fn key_map(&self) -> Result<KeyMap> {
        let overrides = self.keys.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        KeyMap::with_overrides(overrides).context("Invalid [keys] table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{InputEvent, Operator};

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.key_map().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
log_level = "debug"

[keys]
p = "add"
"m" = "multiply"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        let map = config.key_map().unwrap();
        assert_eq!(map.resolve('p'), Some(InputEvent::Operator(Operator::Add)));
        assert_eq!(
            map.resolve('m'),
            Some(InputEvent::Operator(Operator::Multiply))
        );
    }

    #[test]
    fn test_bad_binding_rejected() {
        let config = Config::from_toml("[keys]\nab = \"add\"\n").unwrap();
        assert!(config.key_map().is_err());

        let config = Config::from_toml("[keys]\np = \"power\"\n").unwrap();
        assert!(config.key_map().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_toml("precision = 3\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = Path::new("/nonexistent/keycalc/config.toml");
        assert!(Config::load(Some(path)).is_err());
    }
}
