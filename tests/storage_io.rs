use country_geojson::filter::{ExclusionList, simplify};
use country_geojson::models::FeatureCollection;
use country_geojson::storage;
use std::fs;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/countries-sample.geojson")
}

#[test]
fn load_fixture() {
    let fc = storage::load_geojson(fixture()).unwrap();
    assert_eq!(fc.len(), 6);
}

#[test]
fn save_preserves_non_ascii_and_indents() {
    let fc = storage::load_geojson(fixture()).unwrap();
    let out = simplify(&fc, &ExclusionList::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries-simple.geojson");
    storage::save_geojson(&out.collection, &path).unwrap();

    let txt = fs::read_to_string(&path).unwrap();
    assert!(txt.contains("\"Curaçao\""), "non-ASCII name was escaped");
    assert!(!txt.contains("\\u00e7"));
    assert!(txt.starts_with("{\n  \"type\": \"FeatureCollection\",\n  \"features\": ["));

    let back: FeatureCollection = serde_json::from_str(&txt).unwrap();
    assert_eq!(back, out.collection);
}

#[test]
fn saved_features_have_only_type_geometry_properties() {
    let fc = storage::load_geojson(fixture()).unwrap();
    let out = simplify(&fc, &ExclusionList::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.geojson");
    storage::save_geojson(&out.collection, &path).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    for f in v["features"].as_array().unwrap() {
        let obj = f.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["type", "geometry", "properties"]);
        assert_eq!(obj["properties"].as_object().unwrap().len(), 1);
    }
}

#[test]
fn load_rejects_non_geojson_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(storage::load_geojson(&path).is_err());
}
