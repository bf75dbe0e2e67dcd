//! Test builders: ergonomic constructors for raw rows and run requests.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{DateTime, TimeZone, Utc};
use jobagg_core::{RawRecord, RawValue, RunRequest};

/// The processing timestamp used by every harness.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// A well-formed Indeed row with a salary range and a direct apply link.
pub fn indeed_row(title: &str) -> RawRecord {
    RawRecord::new()
        .with("site", "indeed")
        .with("title", title)
        .with("company", "Acme Corp")
        .with("location", "Nairobi, KE")
        .with("description", "We build job tooling.")
        .with("job_type", "fulltime")
        .with("date_posted", "2024-01-12")
        .with("job_url", "https://ke.indeed.com/viewjob?jk=abc123")
        .with("job_url_direct", "https://acme.example/careers/42")
        .with("is_remote", false)
        .with("min_amount", RawValue::Float(150000.0))
        .with("max_amount", RawValue::Float(250000.0))
        .with("currency", "KES")
        .with("interval", "CompensationInterval.MONTHLY")
        .with("emails", RawValue::from(vec!["jobs@acme.example".to_string()]))
}

/// A sparse LinkedIn row: every optional column is a missing-value marker.
pub fn linkedin_row(title: &str) -> RawRecord {
    RawRecord::new()
        .with("site", "linkedin")
        .with("title", title)
        .with("company", "Globex")
        .with("location", RawValue::Float(f64::NAN))
        .with("description", RawValue::Null)
        .with("job_type", "nan")
        .with("job_level", "mid-senior level")
        .with("date_posted", RawValue::Null)
        .with("job_url", "https://www.linkedin.com/jobs/view/987")
        .with("job_url_direct", RawValue::Float(f64::NAN))
        .with("is_remote", RawValue::Float(f64::NAN))
        .with("min_amount", RawValue::Null)
        .with("max_amount", RawValue::Null)
        .with("currency", RawValue::Null)
        .with("interval", RawValue::Null)
        .with("emails", RawValue::Float(f64::NAN))
}

/// `n` rows alternating between the two sites, titled `job 0`, `job 1`, …
pub fn build_rows(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| {
            let title = format!("job {i}");
            if i % 2 == 0 {
                indeed_row(&title)
            } else {
                linkedin_row(&title)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub fn request(sites: &[&str]) -> RunRequest {
    RunRequest::new(
        "React Developer",
        "Nairobi",
        sites.iter().map(|s| s.to_string()).collect(),
        25,
        Some("KE".to_string()),
    )
    .expect("test request must be valid")
}
