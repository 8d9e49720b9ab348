//! Run configuration: dataset location, output path, and the exclusion table.
//!
//! Every field has a built-in default, so a run needs no configuration at all.
//! A JSON file can override any subset of fields:
//!
//! ```json
//! { "exclusions": ["Cosmodrome", "Bir Tawil"], "excluded_sample": 5 }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Public geo-countries dataset (Natural Earth derived).
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson";

/// Simplified output, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "countries-simple.geojson";

/// Name substrings of features that carry ISO codes but are not countries:
/// sovereign base areas, cosmodromes, disputed banks, remote islands.
/// Hand-curated and not exhaustive.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "Sovereign Base Area",
    "Cosmodrome",
    "Bir Tawil",
    "Bank (Petrel Is.)",
    "Ashmore and Cartier",
    "Clipperton",
    "Coral Sea Islands",
    "Heard Island and McDonald",
    "Norfolk Island",
    "Pitcairn",
    "Brazilian Island",
    "Dhekelia",
];

/// City-like names that turn up in the dataset as separate features.
pub const DEFAULT_CITY_KEYWORDS: &[&str] =
    &["Amman", "Mecca", "Port Sudan", "Cairo", "Baghdad", "Tehran"];

/// Broad keywords used when surveying non-country features. Wider than
/// [`DEFAULT_EXCLUSIONS`]; it also hits real countries ("Solomon Islands").
pub const DEFAULT_NON_COUNTRY_KEYWORDS: &[&str] = &[
    "Sovereign Base",
    "Cosmodrome",
    "Bank",
    "Island",
    "Territory",
    "Dhekelia",
    "Akrotiri",
    "Bir Tawil",
];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub url: String,
    pub output: PathBuf,
    pub exclusions: Vec<String>,
    pub city_keywords: Vec<String>,
    pub non_country_keywords: Vec<String>,
    /// How many excluded features `simplify` lists.
    pub excluded_sample: usize,
    /// How many kept country names `simplify` lists.
    pub name_sample: usize,
    /// Overall cap on the download in seconds, body included. Unset means
    /// only the connect phase is time-limited.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            exclusions: to_strings(DEFAULT_EXCLUSIONS),
            city_keywords: to_strings(DEFAULT_CITY_KEYWORDS),
            non_country_keywords: to_strings(DEFAULT_NON_COUNTRY_KEYWORDS),
            excluded_sample: 10,
            name_sample: 15,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// Load overrides from a JSON file; absent fields keep their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg: Config = serde_json::from_str(r#"{"excluded_sample": 3}"#).unwrap();
        assert_eq!(cfg.excluded_sample, 3);
        assert_eq!(cfg.url, DEFAULT_URL);
        assert_eq!(cfg.exclusions.len(), DEFAULT_EXCLUSIONS.len());
        assert_eq!(cfg.request_timeout_secs, None);
    }

    #[test]
    fn request_timeout_is_configurable() {
        let cfg: Config = serde_json::from_str(r#"{"request_timeout_secs": 600}"#).unwrap();
        assert_eq!(cfg.request_timeout_secs, Some(600));
    }
}
