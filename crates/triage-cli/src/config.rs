//! CLI configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use triage_form::TriageError;

/// Base URL used when neither flag, env, nor config file provide one.
/// The reference backend listens on port 5001.
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self, TriageError> {
        let path = Self::config_path(profile)?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| TriageError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<(), TriageError> {
        let path = Self::config_path(None)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| TriageError::Config(e.to_string()))?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path(profile: Option<&str>) -> Result<PathBuf, TriageError> {
        let home = dirs::home_dir()
            .ok_or_else(|| TriageError::Config("Cannot find home directory".into()))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".triage").join(filename))
    }
}
