use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_patterns: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".caseshift.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if !cli_patterns.is_empty() {
            config.ignore_patterns.extend(cli_patterns);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if !other.ignore_patterns.is_empty() {
            self.ignore_patterns = other.ignore_patterns;
        }
        self.color = other.color;
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseshift").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ignore_patterns.is_empty());
        assert!(config.color);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            ignore_patterns: vec!["^__.*$".to_string()],
            color: false,
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.ignore_patterns, vec!["^__.*$".to_string()]);
        assert!(!merged.color);
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "ignore_patterns = [\"^SKIP_\"]\ncolor = false\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.ignore_patterns, vec!["^SKIP_".to_string()]);
        assert!(!config.color);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.ignore_patterns.is_empty());
        assert!(config.color);
    }
}
