use crate::core::report::PlotArea;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data_file: String,
    pub top_count: usize,
    pub recent_count: usize,
    pub graph_width: f64,
    pub graph_height: f64,
    pub graph_margin: f64,
    /// Size of the terminal canvas the graph is drawn on.
    pub graph_columns: usize,
    pub graph_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        let area = PlotArea::default();
        Self {
            data_file: Self::data_file_default().to_string_lossy().to_string(),
            top_count: 10,
            recent_count: 10,
            graph_width: area.width,
            graph_height: area.height,
            graph_margin: area.margin,
            graph_columns: 60,
            graph_rows: 15,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("splitlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".splitlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("splitlog.conf")
    }

    /// Return the default path of the scores file
    pub fn data_file_default() -> PathBuf {
        Self::config_dir().join("scores.csv")
    }

    /// Data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            width: self.graph_width,
            height: self.graph_height,
            margin: self.graph_margin,
        }
    }

    /// Load configuration from the standard file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::ConfigSave)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration directory, config file and data file.
    ///
    /// `custom_file` overrides the data file location (relative names are
    /// placed inside the config directory). In test mode the config file is
    /// left untouched.
    pub fn init_all(custom_file: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_path = match custom_file {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_file_default(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Self::load()?
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = data_path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Create empty data file if not exists
        if !data_path.exists() {
            fs::File::create(&data_path)?;
        }

        Ok(config)
    }
}
