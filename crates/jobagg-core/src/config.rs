//! Configuration types for jobagg.
//!
//! [`Config::load`] reads `~/.config/jobagg/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::from_file`] layers
//! an explicit file over the defaults instead, and [`Config::defaults`]
//! returns the defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
sites          = ["indeed", "linkedin"]
results_wanted = 50
country        = "USA"

[provider]
kind               = "command"
program            = "jobspy-bridge"
args               = []
path               = ""
timeout_secs       = 300
fetch_description  = true
description_format = "markdown"

[output]
pretty = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/jobagg/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[search]` section: defaults for values the CLI may override.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_sites")]
    pub sites: Vec<String>,
    #[serde(default = "default_results_wanted")]
    pub results_wanted: u32,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_sites() -> Vec<String> { vec!["indeed".to_string(), "linkedin".to_string()] }
fn default_results_wanted() -> u32 { 50 }
fn default_country() -> String { "USA".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sites: default_sites(),
            results_wanted: default_results_wanted(),
            country: default_country(),
        }
    }
}

/// Which provider adapter serves a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Spawn the bridge command and decode its stdout.
    Command,
    /// Replay a previously captured JSON / JSON Lines dump.
    File,
}

/// Description markup requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionFormat {
    Markdown,
    Html,
    Plain,
}

impl DescriptionFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DescriptionFormat::Markdown => "markdown",
            DescriptionFormat::Html => "html",
            DescriptionFormat::Plain => "plain",
        }
    }
}

impl std::fmt::Display for DescriptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `[provider]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_kind")]
    pub kind: ProviderKind,
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Input dump for [`ProviderKind::File`].
    #[serde(default)]
    pub path: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_fetch_description")]
    pub fetch_description: bool,
    #[serde(default = "default_description_format")]
    pub description_format: DescriptionFormat,
}

fn default_kind() -> ProviderKind { ProviderKind::Command }
fn default_program() -> String { "jobspy-bridge".to_string() }
fn default_timeout_secs() -> u64 { 300 }
fn default_fetch_description() -> bool { true }
fn default_description_format() -> DescriptionFormat { DescriptionFormat::Markdown }

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            program: default_program(),
            args: Vec::new(),
            path: PathBuf::new(),
            timeout_secs: default_timeout_secs(),
            fetch_description: default_fetch_description(),
            description_format: default_description_format(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: default_pretty() }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/jobagg/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Layer an explicit config file over the defaults. The file must exist.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jobagg")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
