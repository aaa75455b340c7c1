use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file holding the internal audit log.
    pub database: String,
    /// Roster sheet (CSV). `{year}` is replaced with the roster year.
    pub roster: String,
    #[serde(default = "default_present_marker")]
    pub present_marker: String,
    #[serde(default = "default_sentinel_marker")]
    pub sentinel_marker: String,
    #[serde(default = "default_net_weekday")]
    pub net_weekday: String,
    #[serde(default = "default_net_name")]
    pub net_name: String,
}

fn default_present_marker() -> String {
    "X".to_string()
}
fn default_sentinel_marker() -> String {
    "Do not announce".to_string()
}
fn default_net_weekday() -> String {
    "Thursday".to_string()
}
fn default_net_name() -> String {
    "W7AW".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            roster: Self::config_dir()
                .join("roster-{year}.csv")
                .to_string_lossy()
                .to_string(),
            present_marker: default_present_marker(),
            sentinel_marker: default_sentinel_marker(),
            net_weekday: default_net_weekday(),
            net_name: default_net_name(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.netbuddy`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".netbuddy")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("netbuddy.conf")
    }

    /// Return the default path of the audit database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("netbuddy.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Roster file for a given year.
    pub fn roster_path(&self, year: i32) -> PathBuf {
        expand_tilde(&self.roster.replace("{year}", &year.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the config file (unless in test mode) and make sure the
    /// audit database file exists.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        if !is_test {
            let yaml = self.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        let db_path = Path::new(&self.database);
        if let Some(parent) = db_path.parent() {
            create_parent(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);
        Ok(())
    }
}

fn create_parent(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}
