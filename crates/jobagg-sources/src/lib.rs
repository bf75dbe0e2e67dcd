//! jobagg-sources: job source provider adapters for jobagg.
//!
//! A provider contacts (or stands in for) the job boards and hands back
//! untyped [`RawRecord`] rows. The pipeline never looks behind this
//! interface: retries, anti-bot handling and HTML parsing all belong to the
//! external scraper the adapter wraps.

pub mod command;
pub mod decode;
pub mod file;

use std::path::PathBuf;
use std::time::Duration;

use jobagg_core::config::{DescriptionFormat, ProviderConfig, ProviderKind};
use jobagg_core::RawRecord;

pub use command::CommandProvider;
pub use file::FileProvider;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Provider-side knobs that do not change which postings are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub fetch_description: bool,
    pub description_format: DescriptionFormat,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            fetch_description: true,
            description_format: DescriptionFormat::Markdown,
        }
    }
}

/// Everything a provider needs for one scrape. `sites` is already filtered
/// to the supported whitelist and `country_name` already mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeQuery {
    pub sites: Vec<String>,
    pub search_term: String,
    pub location: String,
    pub results_wanted: u32,
    pub country_name: String,
    pub options: ScrapeOptions,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A provider call that produced no usable rows.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{program}` exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("undecodable provider payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("undecodable CSV payload: {0}")]
    Csv(#[from] csv::Error),
    #[error("provider payload is a bare {0}, not rows")]
    Shape(&'static str),
    #[error("provider reported failure: {0}")]
    Reported(String),
    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// Implemented by each job source adapter.
#[allow(async_fn_in_trait)]
pub trait SourceProvider {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetch raw rows for `query`. Called at most once per run; never retried.
    async fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError>;
}

/// The adapter selected by `[provider] kind` in the config file.
#[derive(Debug, Clone)]
pub enum Provider {
    Command(CommandProvider),
    File(FileProvider),
}

impl Provider {
    pub fn from_config(cfg: &ProviderConfig) -> anyhow::Result<Self> {
        match cfg.kind {
            ProviderKind::Command => {
                if cfg.program.trim().is_empty() {
                    anyhow::bail!("provider.program must be set for the command provider");
                }
                Ok(Provider::Command(CommandProvider::new(
                    cfg.program.clone(),
                    cfg.args.clone(),
                )))
            }
            ProviderKind::File => {
                if cfg.path.as_os_str().is_empty() {
                    anyhow::bail!("provider.path must be set for the file provider");
                }
                Ok(Provider::File(FileProvider::new(cfg.path.clone())))
            }
        }
    }
}

impl SourceProvider for Provider {
    fn name(&self) -> &str {
        match self {
            Provider::Command(p) => p.name(),
            Provider::File(p) => p.name(),
        }
    }

    async fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        match self {
            Provider::Command(p) => p.scrape(query).await,
            Provider::File(p) => p.scrape(query).await,
        }
    }
}
