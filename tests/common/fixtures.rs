//! Static provider payloads used across harnesses.
//!
//! Each payload mirrors what a real bridge command prints, including the
//! quirks the decoder and normalizer must absorb: bare `NaN` tokens, emails
//! flattened to list literals, enum-qualified intervals.

/// A JSON array as printed by a dataframe exporter.
pub const PAYLOAD_ARRAY: &str = r#"[
  {
    "site": "indeed",
    "title": "Frontend Engineer (React)",
    "company": "Acme Corp",
    "location": "Nairobi, KE",
    "description": "  Build UIs.  ",
    "job_type": "fulltime",
    "job_level": NaN,
    "date_posted": "2024-01-12",
    "job_url": "https://ke.indeed.com/viewjob?jk=abc123",
    "job_url_direct": "https://acme.example/careers/42",
    "is_remote": true,
    "min_amount": 150000.0,
    "max_amount": 250000.0,
    "currency": "KES",
    "interval": "CompensationInterval.MONTHLY",
    "emails": "['jobs@acme.example', 'hr@acme.example']"
  },
  {
    "site": "linkedin",
    "title": "React Native Developer",
    "company": "Globex",
    "location": NaN,
    "description": null,
    "job_type": "nan",
    "job_level": "Mid-Senior level",
    "date_posted": "2024-01-10T08:30:00",
    "job_url": "https://www.linkedin.com/jobs/view/987",
    "job_url_direct": NaN,
    "is_remote": NaN,
    "min_amount": NaN,
    "max_amount": 90000,
    "currency": "USD",
    "interval": "yearly",
    "emails": NaN
  }
]"#;

/// The same kind of rows as JSON Lines, with a missing `site` column.
pub const PAYLOAD_JSONL: &str = concat!(
    r#"{"title": "Data Engineer", "company": "Initech", "job_url": "https://x.example/1", "min_amount": 5000, "currency": "EUR"}"#,
    "\n",
    r#"{"title": "ML Engineer", "company": "Initech", "job_url": "https://x.example/2", "emails": "hr@initech.example"}"#,
    "\n",
);

/// A full result document, as written by a previous `--output-file` run.
pub const PAYLOAD_DOCUMENT: &str = r#"{
  "success": true,
  "total_count": 1,
  "jobs": [
    {"site": "glassdoor", "title": "QA Analyst", "company": "Umbrella"}
  ]
}"#;

/// A CSV dump as written by the jobsparser CLI (`pd.to_csv` style cells).
pub const PAYLOAD_CSV: &str = "\
site,title,company,location,date_posted,job_url,is_remote,min_amount,max_amount,currency,interval,emails
indeed,Backend Engineer,Acme Corp,\"Nairobi, KE\",2024-01-11,https://ke.indeed.com/viewjob?jk=csv1,True,120000.0,180000.0,KES,yearly,\"['jobs@acme.example']\"
linkedin,Site Reliability Engineer,Globex,,20240109,https://www.linkedin.com/jobs/view/555,False,,,,,
";

/// What a bridge prints when its scraper library fails to import.
pub const PAYLOAD_ERROR: &str = r#"{"success": false, "error": "jobspy import failed", "jobs": null}"#;
