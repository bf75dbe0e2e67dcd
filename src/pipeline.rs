//! Pipeline driver: one [`RunRequest`] in, one [`RunResult`] out.
//!
//! The driver filters the requested sites, maps the country code, calls the
//! provider under a timeout, and normalises whatever comes back. A provider
//! failure never escapes: it is logged and reported as `success: false` with
//! an empty job list.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jobagg_core::tables::DEFAULT_COUNTRY;
use jobagg_core::{indeed_country, map_sites, normalize_all, RawRecord, RunRequest, RunResult};
use jobagg_sources::{ScrapeOptions, ScrapeQuery, SourceError, SourceProvider};

pub struct Pipeline<P> {
    provider: P,
    timeout: Duration,
    options: ScrapeOptions,
}

impl<P: SourceProvider> Pipeline<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            options: ScrapeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScrapeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run `request`, stamping records with the current time.
    pub async fn run(&self, request: &RunRequest) -> RunResult {
        self.run_at(request, Utc::now()).await
    }

    /// Run `request` with an explicit processing timestamp.
    pub async fn run_at(&self, request: &RunRequest, now: DateTime<Utc>) -> RunResult {
        let sites = map_sites(request.sites());
        if sites.is_empty() {
            tracing::warn!(requested = ?request.sites(), "no supported sites requested; nothing to scrape");
            return RunResult::new(request, true, Vec::new(), now);
        }

        let country_name = indeed_country(request.country().unwrap_or(DEFAULT_COUNTRY));
        tracing::info!(?sites, country = country_name, "scraping");

        let query = ScrapeQuery {
            sites,
            search_term: request.search_term().to_string(),
            location: request.location().to_string(),
            results_wanted: request.results_wanted(),
            country_name: country_name.to_string(),
            options: self.options.clone(),
        };

        match self.fetch(&query).await {
            Ok(raws) => {
                let jobs = normalize_all(&raws, |raw| source_of(raw, &query.sites), now);
                tracing::info!(count = jobs.len(), "normalized jobs");
                RunResult::new(request, true, jobs, now)
            }
            Err(err) => {
                tracing::error!(provider = self.provider.name(), error = %err, "job source unavailable");
                RunResult::new(request, false, Vec::new(), now)
            }
        }
    }

    async fn fetch(&self, query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        match tokio::time::timeout(self.timeout, self.provider.scrape(query)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout(self.timeout)),
        }
    }
}

/// Originating site of a row: its own `site` column, or the only queried
/// site when the provider left it blank.
fn source_of(raw: &RawRecord, sites: &[String]) -> String {
    let site = raw.get_cleaned("site", "");
    match sites {
        [only] if site.is_empty() => only.clone(),
        _ => site,
    }
}
