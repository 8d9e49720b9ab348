//! Read-only views over a collection, used to study the dataset's schema
//! before deciding how to filter it.

use crate::models::{ADMIN, Feature, FeatureCollection, NAME, Properties, property_text};
use std::collections::BTreeSet;

/// `ADMIN`, else `name`, else `fallback`.
pub fn display_name(props: &Properties, fallback: &str) -> String {
    property_text(props, ADMIN)
        .or_else(|| property_text(props, NAME))
        .unwrap_or_else(|| fallback.to_string())
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|n| haystack.contains(n.to_lowercase().as_str()))
}

/// A feature matched by [`find_by_keywords`].
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub name: String,
    pub feature: &'a Feature,
}

/// Features whose display name contains any keyword (case-insensitive).
/// Each feature appears at most once, in input order.
pub fn find_by_keywords<'a>(fc: &'a FeatureCollection, keywords: &[String]) -> Vec<Match<'a>> {
    fc.features
        .iter()
        .filter_map(|feature| {
            let name = display_name(&feature.properties, "");
            contains_any(&name, keywords).then_some(Match { name, feature })
        })
        .collect()
}

/// Every property key used by any feature, sorted.
pub fn property_keys(fc: &FeatureCollection) -> BTreeSet<String> {
    fc.features
        .iter()
        .flat_map(|f| f.properties.keys().cloned())
        .collect()
}

/// `ADMIN` vs `name` comparison across the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminReport {
    /// At least one feature has a non-empty `ADMIN`.
    pub has_admin: bool,
    /// `(name, admin)` pairs where both disagree, in input order.
    pub differences: Vec<(String, String)>,
}

pub fn admin_differences(fc: &FeatureCollection) -> AdminReport {
    let mut report = AdminReport::default();
    for feature in &fc.features {
        let Some(admin) = property_text(&feature.properties, ADMIN) else {
            continue;
        };
        report.has_admin = true;
        let name = property_text(&feature.properties, NAME).unwrap_or_default();
        if admin != name {
            report.differences.push((name, admin));
        }
    }
    report
}

/// Display names containing any keyword, sorted and de-duplicated.
pub fn non_country_names(fc: &FeatureCollection, keywords: &[String]) -> BTreeSet<String> {
    find_by_keywords(fc, keywords)
        .into_iter()
        .map(|m| m.name)
        .collect()
}
