//! Fake source providers.
//!
//! Stand-ins for the external scraper so pipeline behaviour can be tested
//! without spawning processes. Combine with `#[tokio::test(start_paused = true)]`
//! for deterministic timeout tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use jobagg_core::RawRecord;
use jobagg_sources::{ScrapeQuery, SourceError, SourceProvider};

/// Returns a fixed set of rows and records every query it receives.
pub struct StaticProvider {
    rows: Vec<RawRecord>,
    queries: RefCell<Vec<ScrapeQuery>>,
}

impl StaticProvider {
    pub fn new(rows: Vec<RawRecord>) -> Self {
        Self {
            rows,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.borrow().len()
    }

    pub fn last_query(&self) -> Option<ScrapeQuery> {
        self.queries.borrow().last().cloned()
    }
}

impl SourceProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn scrape(&self, query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        self.queries.borrow_mut().push(query.clone());
        Ok(self.rows.clone())
    }
}

/// Fails every call the way a crashed bridge process would.
#[derive(Default)]
pub struct FailingProvider {
    calls: Cell<usize>,
}

impl FailingProvider {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SourceProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn scrape(&self, _query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        self.calls.set(self.calls.get() + 1);
        Err(SourceError::Spawn {
            program: "jobspy-bridge".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
        })
    }
}

/// Sleeps before answering; used to trip the pipeline timeout.
pub struct SlowProvider {
    pub delay: Duration,
    pub rows: Vec<RawRecord>,
}

impl SourceProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn scrape(&self, _query: &ScrapeQuery) -> Result<Vec<RawRecord>, SourceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.rows.clone())
    }
}
