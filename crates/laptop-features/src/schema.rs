//! Fixed feature-record schema.

use serde::{Deserialize, Serialize};

use crate::NormalizedFeatureRecord;

/// Column names of the feature record, in model-input order.
pub const FEATURE_COLUMNS: [&str; 17] = [
    "company",
    "typename",
    "inches",
    "cpu_company",
    "cpu_frequency (ghz)",
    "ram (gb)",
    "gpu_company",
    "opsys",
    "weight (kg)",
    "total_storage_gb",
    "storage_type",
    "is_touchscreen",
    "screen_width",
    "screen_height",
    "cpu_family",
    "cpu_gen_family",
    "gpu_family",
];

/// One cell of a feature row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Text(String),
    Float(f64),
    Int(i64),
    Flag(bool),
}

impl std::fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Float(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Flag(b) => write!(f, "{}", u8::from(*b)),
        }
    }
}

impl NormalizedFeatureRecord {
    /// Values in [`FEATURE_COLUMNS`] order.
    pub fn to_row(&self) -> Vec<FeatureValue> {
        vec![
            FeatureValue::Text(self.company.clone()),
            FeatureValue::Text(self.type_name.clone()),
            FeatureValue::Float(self.inches),
            FeatureValue::Text(self.cpu_company.clone()),
            FeatureValue::Float(self.cpu_frequency_ghz),
            FeatureValue::Int(i64::from(self.ram_gb)),
            FeatureValue::Text(self.gpu_company.clone()),
            FeatureValue::Text(self.op_sys.clone()),
            FeatureValue::Float(self.weight_kg),
            FeatureValue::Float(self.total_storage_gb),
            FeatureValue::Text(self.storage_type.as_str().to_string()),
            FeatureValue::Flag(self.is_touchscreen),
            FeatureValue::Int(i64::from(self.screen_width)),
            FeatureValue::Int(i64::from(self.screen_height)),
            FeatureValue::Text(self.cpu_family.as_str().to_string()),
            FeatureValue::Text(self.cpu_gen_family.clone()),
            FeatureValue::Text(self.gpu_family.clone()),
        ]
    }

    /// `(column, value)` pairs in model-input order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> {
        FEATURE_COLUMNS.into_iter().zip(self.to_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CpuFamily, StorageType};

    fn sample() -> NormalizedFeatureRecord {
        NormalizedFeatureRecord {
            company: "asus".to_string(),
            type_name: "notebook".to_string(),
            inches: 15.6,
            cpu_company: "intel".to_string(),
            cpu_frequency_ghz: 2.5,
            ram_gb: 8,
            gpu_company: "intel".to_string(),
            op_sys: "windows 10".to_string(),
            weight_kg: 2.0,
            total_storage_gb: 256.0,
            storage_type: StorageType::Ssd,
            is_touchscreen: true,
            screen_width: 1920,
            screen_height: 1080,
            cpu_family: CpuFamily::Core,
            cpu_gen_family: "I5".to_string(),
            gpu_family: "hd".to_string(),
        }
    }

    #[test]
    fn serialized_keys_match_columns_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let mut last = 0;
        for column in FEATURE_COLUMNS {
            let needle = format!("\"{}\":", column);
            let pos = json.find(&needle).unwrap_or_else(|| panic!("missing {}", column));
            assert!(pos >= last, "{} out of order", column);
            last = pos;
        }

        let value: serde_json::Value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value.as_object().unwrap().len(), FEATURE_COLUMNS.len());
    }

    #[test]
    fn row_follows_columns() {
        let row = sample().to_row();
        assert_eq!(row.len(), FEATURE_COLUMNS.len());
        assert_eq!(row[5], FeatureValue::Int(8));
        assert_eq!(row[10], FeatureValue::Text("ssd".to_string()));
        assert_eq!(row[11], FeatureValue::Flag(true));
        assert_eq!(row[14], FeatureValue::Text("Core".to_string()));
    }

    #[test]
    fn columns_pairs_names_with_values() {
        let record = sample();
        let pairs: Vec<_> = record.columns().collect();
        assert_eq!(pairs[0], ("company", FeatureValue::Text("asus".to_string())));
        assert_eq!(pairs[16].0, "gpu_family");
    }

    #[test]
    fn flag_displays_as_digit() {
        assert_eq!(FeatureValue::Flag(true).to_string(), "1");
        assert_eq!(FeatureValue::Flag(false).to_string(), "0");
        assert_eq!(FeatureValue::Float(2.5).to_string(), "2.5");
    }
}
