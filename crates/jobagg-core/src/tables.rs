//! Static lookup tables.
//!
//! All tables are compile-time perfect hash maps; they are never mutated or
//! reloaded at runtime.

use phf::{phf_map, phf_set};

/// Country name used when a code is missing from [`INDEED_COUNTRIES`].
pub const DEFAULT_COUNTRY: &str = "USA";

/// Two-letter country code (plus `ALL`) → the country name the job source
/// provider expects for its Indeed market.
pub static INDEED_COUNTRIES: phf::Map<&'static str, &'static str> = phf_map! {
    "US" => "USA",
    "KE" => "Kenya",
    "UK" => "UK",
    "CA" => "Canada",
    "AU" => "Australia",
    "DE" => "Germany",
    "FR" => "France",
    "IN" => "India",
    "BR" => "Brazil",
    "MX" => "Mexico",
    "NL" => "Netherlands",
    "SG" => "Singapore",
    "ZA" => "South Africa",
    "NG" => "Nigeria",
    "EG" => "Egypt",
    "SA" => "Saudi Arabia",
    "AE" => "United Arab Emirates",
    "PK" => "Pakistan",
    "BD" => "Bangladesh",
    "LK" => "Sri Lanka",
    "PH" => "Philippines",
    "ID" => "Indonesia",
    "MY" => "Malaysia",
    "TH" => "Thailand",
    "VN" => "Vietnam",
    "JP" => "Japan",
    "KR" => "South Korea",
    "CN" => "China",
    "HK" => "Hong Kong",
    "TW" => "Taiwan",
    "IT" => "Italy",
    "ES" => "Spain",
    "PT" => "Portugal",
    "SE" => "Sweden",
    "NO" => "Norway",
    "DK" => "Denmark",
    "FI" => "Finland",
    "CH" => "Switzerland",
    "AT" => "Austria",
    "BE" => "Belgium",
    "IE" => "Ireland",
    "PL" => "Poland",
    "CZ" => "Czech Republic",
    "HU" => "Hungary",
    "RO" => "Romania",
    "BG" => "Bulgaria",
    "HR" => "Croatia",
    "SI" => "Slovenia",
    "SK" => "Slovakia",
    "LT" => "Lithuania",
    "LV" => "Latvia",
    "EE" => "Estonia",
    "GR" => "Greece",
    "CY" => "Cyprus",
    "MT" => "Malta",
    "IS" => "Iceland",
    "LU" => "Luxembourg",
    "MC" => "Monaco",
    "LI" => "Liechtenstein",
    "AD" => "Andorra",
    "SM" => "San Marino",
    "VA" => "Holy See",
    // Global searches fall back to the US market.
    "ALL" => "USA",
};

/// Site identifiers the source provider knows how to scrape.
pub static SUPPORTED_SITES: phf::Set<&'static str> = phf_set! {
    "indeed",
    "linkedin",
    "glassdoor",
    "google",
    "zip_recruiter",
    "bayt",
    "bdjobs",
    "naukri",
};

/// Textual spellings of "missing" seen in provider output.
pub static SENTINEL_MARKERS: phf::Set<&'static str> = phf_set! {
    "nan",
    "NaN",
    "NaT",
    "None",
    "<NA>",
};

/// Enum-style qualifiers that leak into interval strings, e.g.
/// `CompensationInterval.monthly`.
pub static INTERVAL_QUALIFIERS: phf::Set<&'static str> = phf_set! {
    "CompensationInterval.",
};
