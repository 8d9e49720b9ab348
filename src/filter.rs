//! Country filter: keep features that look like real countries and reduce each
//! one to `{type, geometry, properties: {name}}`.
//!
//! A feature is kept iff it carries a non-empty ISO 3166-1 alpha-2 or alpha-3
//! code **and** its `name` contains none of the exclusion substrings
//! (case-insensitive). Input order is preserved. The transform is lossy: the
//! output has no ISO codes left, so filtering it again yields nothing.
//!
//! ```
//! use country_geojson::filter::{ExclusionList, simplify};
//! use country_geojson::models::FeatureCollection;
//!
//! let fc = FeatureCollection::from_slice(br#"{
//!   "type": "FeatureCollection",
//!   "features": [
//!     {"type": "Feature", "geometry": null,
//!      "properties": {"name": "Malta", "ISO3166-1-Alpha-2": "MT"}},
//!     {"type": "Feature", "geometry": null,
//!      "properties": {"name": "Akrotiri and Dhekelia", "ISO3166-1-Alpha-2": "XX"}}
//!   ]
//! }"#)?;
//! let out = simplify(&fc, &ExclusionList::default());
//! assert_eq!(out.collection.features.len(), 1);
//! assert_eq!(out.excluded_count, 1);
//! # Ok::<(), country_geojson::Error>(())
//! ```

use crate::config::DEFAULT_EXCLUSIONS;
use crate::models::{
    Feature, FeatureCollection, ISO_ALPHA_2, ISO_ALPHA_3, NAME, Properties, is_present,
    property_text,
};
use serde_json::Value;

/// Name used when a feature has no usable `name` property.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Case-insensitive substring table of known non-country entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionList {
    entries: Vec<String>,
    // lowercased copies, same order as `entries`
    folded: Vec<String>,
}

impl ExclusionList {
    /// Build a table from raw entries. Blank entries are dropped, since an
    /// empty substring would match every name.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|e| !e.trim().is_empty())
            .collect();
        let folded = entries.iter().map(|e| e.to_lowercase()).collect();
        Self { entries, folded }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// First entry contained in `name`, ignoring case.
    pub fn matches(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.folded
            .iter()
            .position(|f| name.contains(f.as_str()))
            .map(|i| self.entries[i].as_str())
    }
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSIONS.iter().copied())
    }
}

/// Outcome of the per-feature country test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub name: String,
    pub has_iso: bool,
    /// Name matched an exclusion entry.
    pub is_excluded: bool,
}

impl Classification {
    pub fn is_country(&self) -> bool {
        self.has_iso && !self.is_excluded
    }
}

/// `name` property, or [`UNKNOWN_NAME`] when absent or empty.
pub fn feature_name(props: &Properties) -> String {
    property_text(props, NAME).unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Either ISO 3166-1 code is present and non-empty.
pub fn has_iso_code(props: &Properties) -> bool {
    [ISO_ALPHA_2, ISO_ALPHA_3]
        .iter()
        .any(|key| props.get(*key).is_some_and(is_present))
}

pub fn classify(feature: &Feature, exclusions: &ExclusionList) -> Classification {
    let name = feature_name(&feature.properties);
    let has_iso = has_iso_code(&feature.properties);
    let is_excluded = exclusions.matches(&name).is_some();
    Classification {
        name,
        has_iso,
        is_excluded,
    }
}

/// Copy `type` and `geometry`, replacing all properties with `{name}`.
pub fn normalize(feature: &Feature, name: String) -> Feature {
    let mut properties = Properties::new();
    properties.insert(NAME.to_string(), Value::String(name));
    Feature {
        kind: feature.kind.clone(),
        geometry: feature.geometry.clone(),
        properties,
    }
}

/// Result of [`simplify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Simplified {
    pub collection: FeatureCollection,
    /// Number of input features left out.
    pub excluded_count: usize,
    /// Classification of every left-out feature, in input order.
    pub excluded: Vec<Classification>,
}

/// Filter `input` down to real countries. Never fails and never mutates the input.
pub fn simplify(input: &FeatureCollection, exclusions: &ExclusionList) -> Simplified {
    let mut features = Vec::new();
    let mut excluded = Vec::new();

    for feature in &input.features {
        let class = classify(feature, exclusions);
        if class.is_country() {
            features.push(normalize(feature, class.name));
        } else {
            log::debug!(
                "excluding {:?} (has_iso={}, is_excluded={})",
                class.name,
                class.has_iso,
                class.is_excluded
            );
            excluded.push(class);
        }
    }

    Simplified {
        collection: FeatureCollection {
            kind: input.kind.clone(),
            features,
        },
        excluded_count: excluded.len(),
        excluded,
    }
}
