use crate::error::Result;
use crate::models::FeatureCollection;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// Compact-JSON sizes before and after simplification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SizeReport {
    pub original_bytes: usize,
    pub simplified_bytes: usize,
}

fn compact_len(fc: &FeatureCollection) -> Result<usize> {
    Ok(serde_json::to_vec(fc)?.len())
}

impl SizeReport {
    pub fn measure(original: &FeatureCollection, simplified: &FeatureCollection) -> Result<Self> {
        Ok(Self {
            original_bytes: compact_len(original)?,
            simplified_bytes: compact_len(simplified)?,
        })
    }

    /// Percentage saved, `0.0` for an empty original.
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.simplified_bytes as f64 / self.original_bytes as f64) * 100.0
    }

    /// `Reduced from 1,234 to 567 bytes`
    pub fn describe(&self) -> String {
        format!(
            "Reduced from {} to {} bytes",
            self.original_bytes.to_formatted_string(&Locale::en),
            self.simplified_bytes.to_formatted_string(&Locale::en)
        )
    }
}
