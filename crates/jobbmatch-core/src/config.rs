//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `jobbmatch.<ext>` in current directory or any parent
//! - `.jobbmatch.<ext>` in current directory or any parent
//! - `~/.config/jobbmatch/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! Environment variables prefixed with `JOBBMATCH_` override every file,
//! e.g. `JOBBMATCH_RANK_LIMIT=3`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use jobbmatch_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! let synonyms = config.synonym_table();
//! ```

use std::borrow::Cow;
use std::collections::HashMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::synonyms::SynonymTable;

/// Result count for `rank` when neither the command line nor config sets one.
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// Application configuration.
///
/// Every field is optional in files; unset fields take the defaults below.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the CLI's stderr and file logs.
    pub log_level: LogLevel,
    /// Directory for JSONL log files.
    pub log_dir: Option<Utf8PathBuf>,
    /// Maximum size of an input document in bytes. Default: 5 MiB.
    pub max_input_bytes: Option<usize>,
    /// Ignore `max_input_bytes` entirely.
    #[serde(default)]
    pub disable_input_limit: bool,
    /// Number of postings `rank` returns by default.
    pub rank_limit: Option<usize>,
    /// Default quality gate for `match`, 0–100.
    pub min_match_score: Option<u8>,
    /// Default quality gate for `ats`, 0–100.
    pub min_ats_score: Option<u8>,
    /// Extra synonym entries, merged over the built-in table.
    ///
    /// ```toml
    /// [synonyms]
    /// svelte = ["sveltekit", "javascript"]
    /// ```
    pub synonyms: Option<HashMap<String, Vec<String>>>,
}

impl Config {
    /// Check ranges figment cannot express.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] for a zero `rank_limit` or a quality gate
    /// above 100.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.rank_limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "rank_limit",
                message: "must be at least 1".to_string(),
            });
        }
        for (field, value) in [
            ("min_match_score", self.min_match_score),
            ("min_ats_score", self.min_ats_score),
        ] {
            if let Some(v) = value
                && v > 100
            {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: format!("{v} is above 100"),
                });
            }
        }
        Ok(())
    }

    /// Effective rank limit.
    pub fn rank_limit(&self) -> usize {
        self.rank_limit.unwrap_or(DEFAULT_RANK_LIMIT)
    }

    /// The synonym table to match with: the built-in table, extended by
    /// `synonyms` when any are configured.
    pub fn synonym_table(&self) -> Cow<'static, SynonymTable> {
        match &self.synonyms {
            Some(extra) if !extra.is_empty() => Cow::Owned(SynonymTable::with_extra(extra)),
            _ => Cow::Borrowed(SynonymTable::builtin()),
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Debug level logging.
    Debug,
    /// Info level logging (default).
    #[default]
    Info,
    /// Warning level logging.
    Warn,
    /// Error level logging.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files, low to high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file, if found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed explicitly, in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The highest-precedence file that contributed, if any.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported config file extensions, low to high precedence.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name used for the user config directory.
const APP_NAME: &str = "jobbmatch";

/// Base names searched for project config files.
const APP_NAMES: &[&str] = &["jobbmatch"];

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "JOBBMATCH_";

/// Builder for loading configuration from layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that includes user config and stops at `.git`.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Search for project config starting at `path` and walking upward.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Stop the upward search in the directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file. Later files override earlier ones.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load and validate the merged configuration.
    ///
    /// Precedence, lowest first: defaults, user file, project files, explicit
    /// files, `JOBBMATCH_*` environment variables.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Deserialize`] if a source fails to parse, and
    /// [`ConfigError::InvalidValue`] if the result fails [`Config::validate`].
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // JOBBMATCH_RANK_LIMIT=3, JOBBMATCH_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.validate()?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            extra_synonyms = config.synonyms.as_ref().map_or(0, HashMap::len),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fail when no config file exists at all.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when no user, project or explicit file was
    /// found, otherwise as [`load`](Self::load).
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Config files in the nearest directory (from `start` upward) that has
    /// any, low to high precedence.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Dotfiles first (lower precedence), then regular files.
            for app_name in APP_NAMES {
                for ext in CONFIG_EXTENSIONS {
                    let dotfile = dir.join(format!(".{app_name}.{ext}"));
                    if dotfile.is_file() {
                        found.push(dotfile);
                    }
                }
                for ext in CONFIG_EXTENSIONS {
                    let regular = dir.join(format!("{app_name}.{ext}"));
                    if regular.is_file() {
                        found.push(regular);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config next to the marker
            // is still found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/jobbmatch/` on Linux, `~/Library/Application Support/jobbmatch/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}
