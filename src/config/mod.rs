use crate::core::tracker::TrackingMode;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_billable_log")]
    pub billable_log: String,
    #[serde(default = "default_non_billable_log")]
    pub non_billable_log: String,
    #[serde(default = "default_session_file")]
    pub session_file: String,
    #[serde(default)]
    pub tracking_mode: TrackingMode,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_category")]
    pub default_category: Category,
}

fn default_data_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_billable_log() -> String {
    Category::Billable.default_log_file().to_string()
}
fn default_non_billable_log() -> String {
    Category::NonBillable.default_log_file().to_string()
}
fn default_session_file() -> String {
    "active_sessions.json".to_string()
}
fn default_window_days() -> u32 {
    7
}
fn default_category() -> Category {
    Category::Billable
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            billable_log: default_billable_log(),
            non_billable_log: default_non_billable_log(),
            session_file: default_session_file(),
            tracking_mode: TrackingMode::default(),
            window_days: default_window_days(),
            default_category: default_category(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rworklog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Directory holding the logs and the active-session file.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn log_path(&self, category: Category) -> PathBuf {
        let name = match category {
            Category::Billable => &self.billable_log,
            Category::NonBillable => &self.non_billable_log,
        };
        resolve_in(&self.data_path(), name)
    }

    pub fn session_path(&self) -> PathBuf {
        resolve_in(&self.data_path(), &self.session_file)
    }

    /// Create the config directory and, unless in test mode, write the config
    /// file. `data_dir` overrides the default log directory.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Config::default();
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }

        fs::create_dir_all(config.data_path())?;

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
