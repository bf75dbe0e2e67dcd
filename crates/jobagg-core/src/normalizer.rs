//! Normalizer: turns provider [`RawRecord`]s into [`CanonicalJobRecord`]s.
//!
//! Every function here is total: malformed or missing input degrades to the
//! documented default (empty string, empty list, `false`) instead of failing,
//! so one bad row never costs the rest of the batch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::literal::parse_string_list;
use crate::tables::{DEFAULT_COUNTRY, INDEED_COUNTRIES, INTERVAL_QUALIFIERS, SUPPORTED_SITES};
use crate::types::{CanonicalJobRecord, RawRecord, RawValue};

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Trimmed string form of `value`; empty for absent values and sentinels.
pub fn clean(value: Option<&RawValue>) -> String {
    value
        .and_then(RawValue::render)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Coerce an `emails` cell into a list of addresses.
///
/// Lists pass through in order, text holding a sequence literal is parsed,
/// and any other text becomes a one-element list. Never fails.
pub fn coerce_emails(value: Option<&RawValue>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    if value.is_sentinel() {
        return Vec::new();
    }
    match value {
        RawValue::List(items) => items
            .iter()
            .filter_map(|item| match item {
                RawValue::Text(s) => Some(s.clone()),
                other => other.render(),
            })
            .collect(),
        RawValue::Text(s) if s.is_empty() => Vec::new(),
        RawValue::Text(s) => match parse_string_list(s) {
            Ok(items) => items,
            Err(err) => {
                tracing::trace!(%err, "emails cell is not a sequence literal; keeping as-is");
                vec![s.clone()]
            }
        },
        other => other.render().into_iter().collect(),
    }
}

/// Human-readable salary range built from already-cleaned amounts.
///
/// The currency is appended even when empty, leaving a trailing space;
/// consumers match on this exact shape.
pub fn salary_display(min: &str, max: &str, currency: &str) -> String {
    match (min.is_empty(), max.is_empty()) {
        (false, false) => format!("{min} - {max} {currency}"),
        (false, true) => format!("{min}+ {currency}"),
        (true, false) => format!("Up to {max} {currency}"),
        (true, true) => String::new(),
    }
}

/// Strip enum-style qualifiers such as `CompensationInterval.MONTHLY` down
/// to `monthly`. Intervals without a known qualifier pass through.
pub fn clean_interval(interval: &str) -> String {
    let qualified = INTERVAL_QUALIFIERS.iter().any(|q| interval.contains(q));
    match interval.rsplit_once('.') {
        Some((_, word)) if qualified => word.to_lowercase(),
        _ => interval.to_string(),
    }
}

/// Prefer the employer's own apply link over the job-board listing.
pub fn application_url(job_url: &str, job_url_direct: &str) -> String {
    if job_url_direct.is_empty() {
        job_url.to_string()
    } else {
        job_url_direct.to_string()
    }
}

/// Best-effort boolean; anything unrecognised is `false`.
pub fn coerce_remote(value: Option<&RawValue>) -> bool {
    match value {
        Some(RawValue::Bool(b)) => *b,
        Some(RawValue::Int(i)) => *i != 0,
        Some(RawValue::Float(f)) => f.is_finite() && *f != 0.0,
        Some(RawValue::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "t" | "yes" | "y" | "1"
        ),
        _ => false,
    }
}

/// Reduce a cleaned `date_posted` value to `YYYY-MM-DD`, or empty if it
/// cannot be read as a date.
pub fn normalize_posted_date(cleaned: &str) -> String {
    if cleaned.is_empty() {
        return String::new();
    }
    if let Ok(date) = NaiveDate::parse_from_str(cleaned, "%Y-%m-%d") {
        return date.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return dt.date_naive().to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(cleaned, fmt) {
            return dt.date().to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(cleaned, "%Y%m%d") {
        return date.to_string();
    }
    // Bare digits shorter than ten are not a plausible posting timestamp.
    if cleaned.len() >= 10 && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        let Ok(epoch) = cleaned.parse::<i64>() else {
            return String::new();
        };
        let parsed = if epoch > 100_000_000_000 {
            DateTime::from_timestamp_millis(epoch)
        } else {
            DateTime::from_timestamp(epoch, 0)
        };
        if let Some(dt) = parsed {
            return dt.date_naive().to_string();
        }
    }
    tracing::debug!(value = cleaned, "unreadable posted date dropped");
    String::new()
}

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Map a country code to the provider's country name (case-insensitive).
/// Unknown codes fall back to `"USA"`.
pub fn indeed_country(code: &str) -> &'static str {
    INDEED_COUNTRIES
        .get(code.to_uppercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_COUNTRY)
}

/// Keep only supported sites, in requested order, each at most once.
pub fn map_sites<S: AsRef<str>>(requested: &[S]) -> Vec<String> {
    let mut sites: Vec<String> = Vec::with_capacity(requested.len());
    for site in requested.iter().map(AsRef::as_ref) {
        if !SUPPORTED_SITES.contains(site) {
            tracing::debug!(site, "unsupported site dropped");
            continue;
        }
        if !sites.iter().any(|s| s == site) {
            sites.push(site.to_string());
        }
    }
    sites
}

// ---------------------------------------------------------------------------
// Record assembly
// ---------------------------------------------------------------------------

/// Normalise one raw record. `source` is the originating site; `now` becomes
/// the record's `scraped_at`.
pub fn normalize(raw: &RawRecord, source: &str, now: DateTime<Utc>) -> CanonicalJobRecord {
    let field = |key: &str| raw.get_cleaned(key, "");

    let min_amount = field("min_amount");
    let max_amount = field("max_amount");
    let currency = field("currency");
    let salary_display = salary_display(&min_amount, &max_amount, &currency);

    let job_url = field("job_url");
    let job_url_direct = field("job_url_direct");

    CanonicalJobRecord {
        title: field("title"),
        company: field("company"),
        location: field("location"),
        description: field("description"),
        job_type: field("job_type"),
        job_level: field("job_level"),
        posted_date: normalize_posted_date(&field("date_posted")),
        application_url: application_url(&job_url, &job_url_direct),
        job_url_direct,
        source: source.trim().to_string(),
        is_remote: coerce_remote(raw.get("is_remote")),
        min_amount,
        max_amount,
        currency,
        interval: clean_interval(&field("interval")),
        salary_display,
        emails: coerce_emails(raw.get("emails")),
        scraped_at: now,
    }
}

/// Normalise a batch, preserving input order and length.
pub fn normalize_all<F>(raws: &[RawRecord], source_of: F, now: DateTime<Utc>) -> Vec<CanonicalJobRecord>
where
    F: Fn(&RawRecord) -> String,
{
    raws.iter()
        .map(|raw| normalize(raw, &source_of(raw), now))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
