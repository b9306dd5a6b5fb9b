use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_goal_minutes")]
    pub daily_goal_minutes: i64,
    #[serde(default)]
    pub remote_base_url: Option<String>,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_goal_minutes() -> i64 {
    180
}

fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            daily_goal_minutes: default_goal_minutes(),
            remote_base_url: None,
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("punchlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let cfg = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Default::default()
        };

        if !is_test {
            cfg.save()?;
        }

        Ok(cfg)
    }

    /// Field-level problems reported by `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.database.trim().is_empty() {
            problems.push("`database` is empty".to_string());
        }
        if self.daily_goal_minutes <= 0 {
            problems.push(format!(
                "`daily_goal_minutes` must be positive (found {})",
                self.daily_goal_minutes
            ));
        }
        if let Some(url) = &self.remote_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                problems.push(format!("`remote_base_url` is not an HTTP(S) URL: {url}"));
            }
        }

        problems
    }
}
