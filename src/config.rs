use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::{constants, utils::paths::get_absolute_path};

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl LogLevel {
    /// default `tracing` filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "warn",
            LogLevel::Verbose => "debug",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    #[serde(skip_serializing_if = "is_default_base_url")]
    base_url: String,

    #[serde(skip_serializing_if = "is_default_timeout")]
    timeout_secs: u64,

    #[serde(skip_serializing_if = "is_default")]
    log_level: LogLevel,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    value == &T::default()
}

fn is_default_base_url(value: &String) -> bool {
    value == constants::DEFAULT_BASE_URL
}

fn is_default_timeout(value: &u64) -> bool {
    *value == constants::DEFAULT_TIMEOUT_SECS
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Normal,
        }
    }
}

impl CliConfig {
    pub fn get_config_filepath() -> io::Result<PathBuf> {
        get_absolute_path(constants::CONFIG_FILEPATH)
    }

    /// a missing file means "all defaults"
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("can not read config file {}", path.display()))
            }
        };

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        if config.timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "invalid config file {}: timeout_secs must be at least 1",
                path.display()
            ));
        }

        Ok(config)
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::get_config_filepath()?)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::DirBuilder::new().recursive(true).create(parent)?;
        }

        let toml_str = toml::to_string(&self)?;
        fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get_base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_base_url(&mut self, base_url: &str) -> anyhow::Result<()> {
        url::Url::parse(base_url).with_context(|| format!("invalid base url '{base_url}'"))?;
        self.base_url = base_url.to_string();

        Ok(())
    }

    pub fn set_timeout_secs(&mut self, timeout_secs: u64) -> anyhow::Result<()> {
        if timeout_secs == 0 {
            return Err(anyhow::anyhow!("timeout must be at least 1 second"));
        }
        self.timeout_secs = timeout_secs;

        Ok(())
    }
}

/// username/token pair kept in `~/.pixela.yaml`
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Credentials {
    pub username: Option<String>,
    pub token: Option<String>,
}

impl Credentials {
    pub fn get_default_filepath() -> io::Result<PathBuf> {
        get_absolute_path(constants::CREDENTIALS_FILEPATH)
    }

    /// a missing file means "no stored credentials"
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("can not read credentials file {}", path.display()))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents)
            .with_context(|| format!("invalid credentials file {}", path.display()))
    }

    /// writes the file only if nothing exists at `path` yet, returns whether it was written
    pub fn save_new(&self, path: &Path) -> anyhow::Result<bool> {
        if let Some(parent) = path.parent() {
            fs::DirBuilder::new().recursive(true).create(parent)?;
        }

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("can not create credentials file {}", path.display()))
            }
        };

        let yaml = serde_yaml::to_string(self)?;
        io::Write::write_all(&mut file, yaml.as_bytes())?;

        Ok(true)
    }
}
