//! Configuration management for navgen.
//!
//! Parses `navgen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `base_path` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Example
//!
//! ```toml
//! base_path = "docs/api/${API_VERSION:-0.8.1}"
//! output = "sidebar.json"
//!
//! [[entries]]
//! title = "API Reference"
//! path = "/api/0.8.1/"
//!
//! [[entries]]
//! page = "changelog"
//!
//! [[entries]]
//! title = "client"
//! subdirectory = "client"
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the documentation base path.
    pub base_path: Option<PathBuf>,
    /// Override the sidebar output file.
    pub output: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "navgen.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation base path as written in TOML (relative string).
    base_path: Option<String>,
    /// Output file as written in TOML (relative string).
    output: Option<String>,
    /// Sidebar entries, in output order.
    pub entries: Vec<EntryConfig>,

    /// Resolved base path (set after loading).
    #[serde(skip)]
    pub base_path_resolved: PathBuf,
    /// Resolved output file (set after loading).
    #[serde(skip)]
    pub output_resolved: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// One sidebar entry as written in `navgen.toml`.
///
/// The variant is selected by the keys present: `subdirectory` makes a
/// collected section, `children` a static section, `path` a link, and
/// `page` a bare page identifier.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EntryConfig {
    /// Section whose children are collected from a subdirectory.
    Collected {
        /// Display title.
        title: String,
        /// Subdirectory under `base_path` to collect markdown files from.
        subdirectory: String,
        /// Whether the section is collapsable (default true).
        #[serde(default = "default_collapsable")]
        collapsable: bool,
    },
    /// Section with a fixed child list.
    Static {
        /// Display title.
        title: String,
        /// Child page identifiers, in output order.
        children: Vec<String>,
        /// Whether the section is collapsable (default true).
        #[serde(default = "default_collapsable")]
        collapsable: bool,
    },
    /// Titled link to a fixed path.
    Link {
        /// Display title.
        title: String,
        /// Link target path.
        path: String,
    },
    /// Bare page identifier.
    Page {
        /// Page identifier.
        page: String,
    },
}

fn default_collapsable() -> bool {
    true
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`base_path`").
        field: String,
        /// Error message (e.g., "${`API_VERSION`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a subdirectory to be a plain relative path without traversal.
fn require_plain_subdirectory(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;

    let path = Path::new(value);
    if path.is_absolute() {
        return Err(ConfigError::Validation(format!(
            "{field} must be relative, got '{value}'"
        )));
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return Err(ConfigError::Validation(format!(
            "{field} must not contain '..', got '{value}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `navgen.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_path) = &settings.base_path {
            self.base_path_resolved.clone_from(base_path);
        }
        if let Some(output) = &settings.output {
            self.output_resolved.clone_from(output);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            base_path: None,
            output: None,
            entries: Vec::new(),
            base_path_resolved: base.join("docs"),
            output_resolved: base.join("sidebar.json"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that every entry has the required fields properly set.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.entries.iter().enumerate() {
            let field = |name: &str| format!("entries[{i}].{name}");
            match entry {
                EntryConfig::Collected {
                    title,
                    subdirectory,
                    ..
                } => {
                    require_non_empty(title, &field("title"))?;
                    require_plain_subdirectory(subdirectory, &field("subdirectory"))?;
                }
                EntryConfig::Static { title, .. } => {
                    require_non_empty(title, &field("title"))?;
                }
                EntryConfig::Link { title, path } => {
                    require_non_empty(title, &field("title"))?;
                    require_non_empty(path, &field("path"))?;
                }
                EntryConfig::Page { page } => {
                    require_non_empty(page, &field("page"))?;
                }
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base_path) = self.base_path {
            self.base_path = Some(expand::expand_env(base_path, "base_path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.base_path_resolved = resolve(self.base_path.as_deref(), "docs");
        self.output_resolved = resolve(self.output.as_deref(), "sidebar.json");
    }
}
