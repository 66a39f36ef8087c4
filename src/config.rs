//! Runtime configuration: optional JSON file, then environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use combat::FightOptions;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_SAVE_PATH: &str = "arena.sav";
pub const DEFAULT_LOG_FILTER: &str = "rpg_arena=info,combat=info,save=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value {value:?} for {name}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub save_path: PathBuf,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
    pub turn_limit: Option<u64>,
    pub log_filter: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
            turn_limit: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ArenaConfig {
    /// Read the config file if one is given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Apply `ARENA_SAVE_PATH`, `ARENA_SEED` and `ARENA_TURN_LIMIT`
    pub fn apply_env<F>(mut self, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var("ARENA_SAVE_PATH") {
            self.save_path = PathBuf::from(path);
        }
        if let Some(seed) = var("ARENA_SEED") {
            self.seed = Some(parse_var("ARENA_SEED", seed)?);
        }
        if let Some(limit) = var("ARENA_TURN_LIMIT") {
            self.turn_limit = Some(parse_var("ARENA_TURN_LIMIT", limit)?);
        }
        Ok(self)
    }

    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.apply_env(|name| std::env::var(name).ok())
    }

    pub fn fight_options(&self) -> FightOptions {
        FightOptions {
            turn_limit: self.turn_limit,
        }
    }
}

fn parse_var(name: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidVar { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_a_file() {
        let config = ArenaConfig::load(None).unwrap();
        assert_eq!(config.save_path, PathBuf::from("arena.sav"));
        assert_eq!(config.seed, None);
        assert_eq!(config.fight_options(), FightOptions::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("arena.json");
        fs::write(&path, r#"{ "seed": 7, "turn_limit": 500 }"#).unwrap();

        let config = ArenaConfig::load(Some(&path)).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.turn_limit, Some(500));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let err = ArenaConfig::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn env_overrides_file_values() {
        let config = ArenaConfig {
            seed: Some(1),
            ..ArenaConfig::default()
        }
        .apply_env(env(&[("ARENA_SEED", "42"), ("ARENA_SAVE_PATH", "/tmp/x.sav")]))
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.save_path, PathBuf::from("/tmp/x.sav"));
        assert_eq!(config.turn_limit, None);
    }

    #[test]
    fn bad_env_value_is_reported() {
        let err = ArenaConfig::default()
            .apply_env(env(&[("ARENA_TURN_LIMIT", "lots")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value \"lots\" for ARENA_TURN_LIMIT");
    }
}
