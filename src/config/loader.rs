//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.board.toml` in the working directory
//! 4. `~/.config/board/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::SortOption;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub data: DataConfig,
    pub display: DisplayConfig,
}

/// Where the static resources are read from.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Page origin to fetch `/json/*.json` from. Overrides `dir` when set.
    pub base_url: Option<String>,
    /// Local static root containing `json/users.json` and `json/products.json`.
    pub dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            dir: constants::DEFAULT_DATA_DIR.to_string(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Sort option selected when the product panel first renders.
    pub default_sort: SortOption,
    /// Emit ANSI colors in terminal output.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: SortOption::Alphabet,
            color: true,
        }
    }
}

/// One config file as written. Keys left out of the file are `None` and
/// leave lower layers untouched; keys that are present always win, even
/// when they repeat a built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data: DataLayer,
    display: DisplayLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataLayer {
    base_url: Option<String>,
    dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DisplayLayer {
    default_sort: Option<SortOption>,
    color: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, working-directory config, then applies
    /// environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: working-directory config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Lay a file's keys over the current values.
    fn merge(&mut self, file: ConfigFile) {
        if let Some(base_url) = file.data.base_url {
            self.data.base_url = Some(base_url);
        }
        if let Some(dir) = file.data.dir {
            self.data.dir = dir;
        }
        if let Some(sort) = file.display.default_sort {
            self.display.default_sort = sort;
        }
        if let Some(color) = file.display.color {
            self.display.color = color;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.non_empty(constants::ENV_BASE_URL) {
            self.data.base_url = Some(val);
        }
        if let Some(val) = env.non_empty(constants::ENV_DATA_DIR) {
            self.data.dir = val;
        }
        if let Some(val) = env.non_empty(constants::ENV_SORT) {
            match val.parse::<SortOption>() {
                Ok(sort) => self.display.default_sort = sort,
                Err(_) => tracing::warn!(
                    "ignoring invalid {} value: {val}",
                    constants::ENV_SORT
                ),
            }
        }
        // NO_COLOR convention: any value disables color
        if env.flag("NO_COLOR") {
            self.display.color = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.data.base_url, None);
        assert_eq!(config.data.dir, "public");
        assert_eq!(config.display.default_sort, SortOption::Alphabet);
        assert!(config.display.color);
    }

    fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn layered(files: &[&str]) -> Config {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        for (i, body) in files.iter().enumerate() {
            let path = write_config(dir.path(), &format!("layer{i}.toml"), body);
            config.merge(Config::load_file(&path).unwrap());
        }
        config
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[data]
base_url = "http://localhost:3000"
dir = "site"

[display]
default_sort = "price-high-to-low"
color = false
"#;
        let config = layered(&[toml_str]);
        assert_eq!(config.data.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.data.dir, "site");
        assert_eq!(config.display.default_sort, SortOption::PriceHighToLow);
        assert!(!config.display.color);
    }

    #[test]
    fn parse_toml_accepts_wire_sort_name() {
        let file: ConfigFile = toml::from_str("[display]\ndefault_sort = \"priceLowToHigh\"\n").unwrap();
        assert_eq!(file.display.default_sort, Some(SortOption::PriceLowToHigh));
    }

    #[test]
    fn later_layer_overrides_earlier() {
        let config = layered(&[
            "[data]\ndir = \"static\"\n[display]\ncolor = false\n",
            "[data]\nbase_url = \"https://board.example\"\n[display]\ndefault_sort = \"price-low-to-high\"\n",
        ]);
        assert_eq!(config.data.base_url.as_deref(), Some("https://board.example"));
        assert_eq!(config.data.dir, "static");
        assert_eq!(config.display.default_sort, SortOption::PriceLowToHigh);
        assert!(!config.display.color);
    }

    #[test]
    fn absent_keys_keep_lower_layer() {
        let config = layered(&["[data]\ndir = \"static\"\n[display]\ndefault_sort = \"price-high-to-low\"\n", ""]);
        assert_eq!(config.data.dir, "static");
        assert_eq!(config.display.default_sort, SortOption::PriceHighToLow);
    }

    #[test]
    fn explicit_default_value_overrides_lower_layer() {
        let config = layered(&[
            "[data]\ndir = \"static\"\n[display]\ndefault_sort = \"price-high-to-low\"\ncolor = false\n",
            "[data]\ndir = \"public\"\n[display]\ndefault_sort = \"alphabet\"\ncolor = true\n",
        ]);
        assert_eq!(config.data.dir, "public");
        assert_eq!(config.display.default_sort, SortOption::Alphabet);
        assert!(config.display.color);
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "bad.toml", "not valid {{ toml");

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_file(&dir.path().join("missing.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), ".board.toml", "[data]\ndir = \"dist\"\n");

        let config = Config::load(Some(dir.path()), &empty_env()).unwrap();
        assert_eq!(config.data.dir, "dist");
    }

    #[test]
    fn env_vars_override_file_values() {
        let env = Env::mock([
            ("BOARD_BASE_URL", "http://127.0.0.1:8080"),
            ("BOARD_DATA_DIR", "fixtures"),
            ("BOARD_SORT", "price-low-to-high"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.data.base_url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.data.dir, "fixtures");
        assert_eq!(config.display.default_sort, SortOption::PriceLowToHigh);
    }

    #[test]
    fn invalid_env_sort_is_ignored() {
        let env = Env::mock([("BOARD_SORT", "by-vibes")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.display.default_sort, SortOption::Alphabet);
    }

    #[test]
    fn no_color_env_disables_color() {
        let env = Env::mock([("NO_COLOR", "1")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert!(!config.display.color);
    }
}
