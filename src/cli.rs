//! Command-line interface.
//!
//! Flags override the `[search]` section of the config file; anything not
//! given on the command line falls back to it.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use jobagg_core::config::SearchConfig;
use jobagg_core::{RequestError, RunRequest};

#[derive(Debug, Parser)]
#[command(
    name = "jobagg",
    about = "Aggregate job postings from multiple job boards into one JSON document"
)]
pub struct Cli {
    /// Job search term (e.g. "React Developer").
    #[arg(long)]
    pub search_term: String,

    /// Location for the job search (e.g. "Nairobi").
    #[arg(long)]
    pub location: String,

    /// Sites to scrape. Unsupported names are ignored. [default: from config]
    #[arg(long, num_args = 1..)]
    pub sites: Option<Vec<String>>,

    /// Number of results to fetch per site. [default: from config]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub results_wanted: Option<u32>,

    /// Two-letter country code for the Indeed market. [default: from config]
    #[arg(long, visible_alias = "country-indeed")]
    pub country: Option<String>,

    /// Write the JSON document here instead of stdout.
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/jobagg/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the run request, filling unset flags from `search`.
    pub fn to_request(&self, search: &SearchConfig) -> Result<RunRequest, RequestError> {
        RunRequest::new(
            self.search_term.clone(),
            self.location.clone(),
            self.sites.clone().unwrap_or_else(|| search.sites.clone()),
            self.results_wanted.unwrap_or(search.results_wanted),
            Some(self.country.clone().unwrap_or_else(|| search.country.clone())),
        )
    }

    /// Default `tracing` filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
