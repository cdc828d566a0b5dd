use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Args;
use crate::core::{Result, RosterError, DEFAULT_ROSTER_FILE};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_roster_file")]
    pub roster_file: PathBuf,
}

fn default_roster_file() -> PathBuf {
    PathBuf::from(DEFAULT_ROSTER_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_file: default_roster_file(),
        }
    }
}

impl Config {
    /// Resolve the configuration for one run.
    ///
    /// `--file` wins over any config file. A config file named with
    /// `--config` must exist; the one in the user config directory is
    /// optional. Unusable config files are reported on stderr and the
    /// defaults are used.
    pub fn new(args: &Args) -> Self {
        let mut config = match Self::from_sources(args.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Using default settings");
                Config::default()
            }
        };

        if let Some(file) = &args.file {
            config.roster_file = file.clone();
        }

        log::debug!("Roster file: {}", config.roster_file.display());
        config
    }

    fn from_sources(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Read a config file
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            RosterError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str::<Config>(&config_str).map_err(|e| {
            RosterError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("course-registration").join("config.json"))
    }
}
