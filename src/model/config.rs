use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Built-in settings. The collector target and paths are fixed; only
/// `[logging]` can be changed by a user config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticConfig {
    pub collector: CollectorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Plugin names starting with this string are dumped.
    pub plugin_prefix: String,
    pub database_dir: String,
    pub report_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Sections honoured in the user's `config.toml`; anything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    #[serde(default)]
    logging: Option<LoggingConfig>,
}

impl DiagnosticConfig {
    /// Embedded defaults with `~` expanded. Logging is resolved separately
    /// through [`LoggingConfig::load`].
    pub fn load() -> Result<Self> {
        Self::defaults()?.expand_home()
    }

    pub fn defaults() -> Result<Self> {
        let defaults = include_str!("../../config/default.toml");
        Ok(toml::from_str(defaults)?)
    }

    /// Expand a leading `~` in every path setting.
    pub fn expand_home(mut self) -> Result<Self> {
        let needs_home = [&self.collector.database_dir, &self.collector.report_path]
            .iter()
            .any(|p| p.starts_with('~'));
        if !needs_home {
            return Ok(self);
        }

        let home = dirs_home().ok_or_else(|| anyhow!("cannot determine home directory"))?;
        let home = home.to_string_lossy();
        for path in [
            &mut self.collector.database_dir,
            &mut self.collector.report_path,
        ] {
            if path.starts_with('~') {
                *path = path.replacen('~', &home, 1);
            }
        }

        Ok(self)
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.collector.database_dir)
    }

    pub fn report_path(&self) -> PathBuf {
        PathBuf::from(&self.collector.report_path)
    }

    pub fn plugin_prefix(&self) -> &str {
        &self.collector.plugin_prefix
    }
}

impl LoggingConfig {
    /// Logging settings with layering: defaults → user config.
    ///
    /// Never fails: a broken user file falls back to the defaults and the
    /// error is handed back so it can be logged once logging is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        Self::load_from(user_config_path().as_deref())
    }

    pub fn load_from(user_path: Option<&Path>) -> (Self, Option<anyhow::Error>) {
        let defaults = Self::defaults();

        let Some(path) = user_path.filter(|p| p.exists()) else {
            return (defaults, None);
        };

        match read_user_config(path) {
            Ok(UserConfig {
                logging: Some(logging),
            }) => (logging, None),
            Ok(_) => (defaults, None),
            Err(err) => (defaults, Some(err)),
        }
    }

    fn defaults() -> Self {
        DiagnosticConfig::defaults()
            .map(|config| config.logging)
            .unwrap_or_else(|_| Self {
                filter: "tempo_diagnostic=info".to_string(),
            })
    }
}

fn read_user_config(path: &Path) -> Result<UserConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "tempo-diagnostic")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf())
}
