use crate::api::Download;
use crate::error::{Error, Result};
use crate::models::FeatureCollection;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read and decode a GeoJSON feature collection from disk.
pub fn load_geojson<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    read_geojson(path).map(|d| d.collection)
}

/// [`load_geojson`], keeping the byte length of the file as read.
pub fn read_geojson<P: AsRef<Path>>(path: P) -> Result<Download> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(io_err(path))?;
    let collection = FeatureCollection::from_slice(&bytes)?;
    Ok(Download {
        collection,
        bytes: bytes.len(),
    })
}

/// Save a collection as 2-space indented UTF-8 JSON. Non-ASCII characters are
/// written as-is, not escaped.
pub fn save_geojson<P: AsRef<Path>>(fc: &FeatureCollection, path: P) -> Result<()> {
    let path = path.as_ref();
    let s = serde_json::to_string_pretty(fc)?;
    let mut f = File::create(path).map_err(io_err(path))?;
    f.write_all(s.as_bytes()).map_err(io_err(path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Feature;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn write_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.geojson");
        let fc = FeatureCollection::new(vec![Feature {
            kind: "Feature".into(),
            geometry: json!({"type": "Point", "coordinates": [14.5, 35.9]}),
            properties: json!({"name": "Malta"}).as_object().unwrap().clone(),
        }]);
        save_geojson(&fc, &path).unwrap();
        assert_eq!(load_geojson(&path).unwrap(), fc);
    }

    #[test]
    fn read_reports_file_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.geojson");
        let doc = r#"{"type":"FeatureCollection","features":[]}"#;
        std::fs::write(&path, doc).unwrap();
        let read = read_geojson(&path).unwrap();
        assert_eq!(read.bytes, doc.len());
        assert!(read.collection.is_empty());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_geojson("/definitely/not/here.geojson").unwrap_err();
        assert!(err.to_string().contains("not/here.geojson"));
    }
}
