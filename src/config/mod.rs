use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite-backed workbook holding all sheets.
    pub database: String,
    /// Root directory where project folders and generated PDFs live.
    pub output_dir: String,
    /// Path of the placeholder template document.
    pub template_file: String,
    /// Email used to resolve the acting user when --user is not given.
    #[serde(default)]
    pub operator_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            output_dir: Self::config_dir().join("output").to_string_lossy().to_string(),
            template_file: Self::template_file_path().to_string_lossy().to_string(),
            operator_email: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".specbook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("specbook.conf")
    }

    /// Return the full path of the SQLite workbook
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("specbook.sqlite")
    }

    /// Return the full path of the default template document
    pub fn template_file_path() -> PathBuf {
        Self::config_dir().join("template.txt")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration directory and files.
    /// In test mode the config file itself is not written, so runs with
    /// --db/--out/--template overrides leave the user's setup alone.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}
