//! Bridge-command provider.
//!
//! Spawns an external scraper executable, passes the query as flags, and
//! decodes the rows it prints on stdout. The child is killed if the future
//! is dropped, so a caller-side timeout also ends the process.
//!
//! Flags appended after the configured base arguments:
//!
//! ```text
//! --search-term <T> --location <L> --results-wanted <N> --country-indeed <C>
//! --site <S>...  --description-format <F>  [--fetch-description]
//! ```

use std::process::Stdio;

use jobagg_core::RawRecord;
use tokio::process::Command;

use crate::decode::decode_payload;
use crate::{ScrapeQuery, SourceError, SourceProvider};

#[derive(Debug, Clone)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
}

impl CommandProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Full argument list for `query`: base args first, then query flags.
    pub fn command_args(&self, query: &ScrapeQuery) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend([
            "--search-term".to_string(),
            query.search_term.clone(),
            "--location".to_string(),
            query.location.clone(),
            "--results-wanted".to_string(),
            query.results_wanted.to_string(),
            "--country-indeed".to_string(),
            query.country_name.clone(),
        ]);
        for site in &query.sites {
            args.push("--site".to_string());
            args.push(site.clone());
        }
        args.push("--description-format".to_string());
        args.push(query.options.description_format.to_string());
        if query.options.fetch_description {
            args.push("--fetch-description".to_string());
        }
        args
    }
}

impl SourceProvider for CommandProvider {
    fn name(&self) -> &str {
        "command"
    }

    async fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        let args = self.command_args(query);
        tracing::info!(
            program = %self.program,
            search_term = %query.search_term,
            location = %query.location,
            sites = ?query.sites,
            "starting job scrape"
        );
        tracing::debug!(?args, "bridge arguments");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| SourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(SourceError::Exit {
                program: self.program.clone(),
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            tracing::debug!(%stderr, "bridge diagnostics");
        }

        let records = decode_payload(&String::from_utf8_lossy(&output.stdout))?;
        tracing::info!(count = records.len(), "bridge returned rows");
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
