//! File-replay provider.
//!
//! Serves rows from a JSON, JSON Lines or CSV dump captured from an earlier
//! scrape; a `.csv` extension selects the CSV decoder. Rows are filtered to the queried sites and capped at
//! `results_wanted` per site, so replays behave like a live provider.

use std::collections::HashMap;
use std::path::PathBuf;

use jobagg_core::RawRecord;

use crate::decode::PayloadFormat;
use crate::{ScrapeQuery, SourceError, SourceProvider};

#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SourceProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        let format = PayloadFormat::from_path(&self.path);
        let rows = format.decode(&text)?;
        let total = rows.len();

        let mut per_site: HashMap<String, u32> = HashMap::new();
        let records: Vec<RawRecord> = rows
            .into_iter()
            .filter(|row| {
                let site = row.get_cleaned("site", "");
                // Rows without a site cannot be attributed; keep them.
                if site.is_empty() {
                    return true;
                }
                if !query.sites.iter().any(|s| *s == site) {
                    return false;
                }
                let seen = per_site.entry(site).or_insert(0);
                *seen += 1;
                *seen <= query.results_wanted
            })
            .collect();

        tracing::info!(
            path = %self.path.display(),
            ?format,
            kept = records.len(),
            total,
            "replayed rows from file"
        );
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
