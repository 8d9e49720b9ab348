use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Property map of a feature. Key order follows the source document.
pub type Properties = Map<String, Value>;

/// Display name property.
pub const NAME: &str = "name";
/// Alternate administrative name, sometimes differs from `name`.
pub const ADMIN: &str = "ADMIN";
pub const ISO_ALPHA_2: &str = "ISO3166-1-Alpha-2";
pub const ISO_ALPHA_3: &str = "ISO3166-1-Alpha-3";

/// Discriminator of a GeoJSON top-level collection.
pub const FEATURE_COLLECTION: &str = "FeatureCollection";

/// GeoJSON top-level object holding an ordered list of features.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

/// A single GeoJSON feature. `geometry` is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub geometry: Value,
    /// `null` and a missing member both decode as an empty map.
    #[serde(default, deserialize_with = "de_properties_or_null")]
    pub properties: Properties,
}

fn de_properties_or_null<'de, D>(deserializer: D) -> std::result::Result<Properties, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Properties>::deserialize(deserializer)?.unwrap_or_default())
}

impl FeatureCollection {
    /// Collection over `features` with the `FeatureCollection` discriminator.
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: FEATURE_COLLECTION.to_string(),
            features,
        }
    }

    /// Decode a collection from raw JSON bytes.
    ///
    /// Fails on malformed JSON, on a missing `type`/`features` member, and when
    /// the top-level `type` is anything other than `FeatureCollection`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let fc: FeatureCollection = serde_json::from_slice(bytes)?;
        if fc.kind != FEATURE_COLLECTION {
            return Err(Error::NotFeatureCollection(fc.kind));
        }
        Ok(fc)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` count as absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|x| x != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Text of a present scalar property. Numbers and booleans are rendered as
/// text; arrays and objects yield `None`.
pub fn property_text(props: &Properties, key: &str) -> Option<String> {
    let value = props.get(key).filter(|v| is_present(v))?;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
