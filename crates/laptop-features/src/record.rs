//! Raw and normalized laptop records.

use serde::{Deserialize, Serialize};

/// One laptop as described by a listing or form submission.
///
/// Serialized names match the dataset columns (`CPU_Frequency (GHz)`,
/// `RAM (GB)`, ...); snake-case aliases are accepted on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct RawSpecRecord {
    #[serde(rename = "Company", alias = "company")]
    pub company: String,
    /// Product name; informational only, not a model input
    #[serde(rename = "Product", alias = "product", default)]
    pub product: String,
    #[serde(rename = "TypeName", alias = "type_name", alias = "typename")]
    pub type_name: String,
    #[serde(rename = "Inches", alias = "inches")]
    pub inches: f64,
    #[serde(rename = "ScreenResolution", alias = "screen_resolution")]
    pub screen_resolution: String,
    #[serde(rename = "CPU_Company", alias = "cpu_company")]
    pub cpu_company: String,
    #[serde(rename = "CPU_Type", alias = "cpu_type")]
    pub cpu_type: String,
    #[serde(rename = "CPU_Frequency (GHz)", alias = "cpu_frequency_ghz")]
    pub cpu_frequency_ghz: f64,
    #[serde(rename = "RAM (GB)", alias = "ram_gb")]
    pub ram_gb: u32,
    /// Storage description, e.g. `"256GB SSD + 1TB HDD"`
    #[serde(rename = "Memory", alias = "memory")]
    pub memory: String,
    #[serde(rename = "GPU_Company", alias = "gpu_company")]
    pub gpu_company: String,
    #[serde(rename = "GPU_Type", alias = "gpu_type")]
    pub gpu_type: String,
    #[serde(rename = "OpSys", alias = "op_sys", alias = "opsys")]
    pub op_sys: String,
    #[serde(rename = "Weight (kg)", alias = "weight_kg")]
    pub weight_kg: f64,
}

/// Coarse persistent-storage technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Ssd,
    Hdd,
    Flash,
    Hybrid,
    #[default]
    Others,
}

impl StorageType {
    /// Column value as the model saw it during training.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssd => "ssd",
            Self::Hdd => "hdd",
            Self::Flash => "flash",
            Self::Hybrid => "hybrid",
            Self::Others => "others",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processor lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum CpuFamily {
    Core,
    #[serde(rename = "Pentium Dual Core")]
    PentiumDualCore,
    Pentium,
    Ryzen,
    #[serde(rename = "FX")]
    Fx,
    Cortex,
    #[default]
    Others,
}

impl CpuFamily {
    /// Column value as the model saw it during training.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::PentiumDualCore => "Pentium Dual Core",
            Self::Pentium => "Pentium",
            Self::Ryzen => "Ryzen",
            Self::Fx => "FX",
            Self::Cortex => "Cortex",
            Self::Others => "Others",
        }
    }
}

impl std::fmt::Display for CpuFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model input: the fixed 17-column feature record.
///
/// Field declaration order is the column order (see
/// [`FEATURE_COLUMNS`](crate::FEATURE_COLUMNS)); serde emits fields in
/// declaration order, so JSON and CSV output follow it too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct NormalizedFeatureRecord {
    pub company: String,
    #[serde(rename = "typename")]
    pub type_name: String,
    pub inches: f64,
    pub cpu_company: String,
    #[serde(rename = "cpu_frequency (ghz)")]
    pub cpu_frequency_ghz: f64,
    #[serde(rename = "ram (gb)")]
    pub ram_gb: u32,
    pub gpu_company: String,
    #[serde(rename = "opsys")]
    pub op_sys: String,
    #[serde(rename = "weight (kg)")]
    pub weight_kg: f64,
    pub total_storage_gb: f64,
    pub storage_type: StorageType,
    pub is_touchscreen: bool,
    pub screen_width: u32,
    pub screen_height: u32,
    pub cpu_family: CpuFamily,
    pub cpu_gen_family: String,
    pub gpu_family: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_type_serializes_lowercase() {
        let json = serde_json::to_string(&StorageType::Hybrid).unwrap();
        assert_eq!(json, "\"hybrid\"");
        assert_eq!(StorageType::default(), StorageType::Others);
    }

    #[test]
    fn cpu_family_serializes_training_labels() {
        let json = serde_json::to_string(&CpuFamily::PentiumDualCore).unwrap();
        assert_eq!(json, "\"Pentium Dual Core\"");
        let json = serde_json::to_string(&CpuFamily::Fx).unwrap();
        assert_eq!(json, "\"FX\"");
        assert_eq!(CpuFamily::default().to_string(), "Others");
    }

    #[test]
    fn raw_record_accepts_dataset_and_snake_case_names() {
        let dataset = r#"{
            "Company": "Apple", "Product": "MacBook Pro", "TypeName": "Ultrabook",
            "Inches": 13.3, "ScreenResolution": "IPS Panel Retina Display 2560x1600",
            "CPU_Company": "Intel", "CPU_Type": "Core i5", "CPU_Frequency (GHz)": 2.3,
            "RAM (GB)": 8, "Memory": "128GB SSD", "GPU_Company": "Intel",
            "GPU_Type": "Iris Plus Graphics 640", "OpSys": "macOS", "Weight (kg)": 1.37
        }"#;
        let snake = r#"{
            "company": "Apple", "type_name": "Ultrabook",
            "inches": 13.3, "screen_resolution": "IPS Panel Retina Display 2560x1600",
            "cpu_company": "Intel", "cpu_type": "Core i5", "cpu_frequency_ghz": 2.3,
            "ram_gb": 8, "memory": "128GB SSD", "gpu_company": "Intel",
            "gpu_type": "Iris Plus Graphics 640", "op_sys": "macOS", "weight_kg": 1.37
        }"#;

        let a: RawSpecRecord = serde_json::from_str(dataset).unwrap();
        let b: RawSpecRecord = serde_json::from_str(snake).unwrap();
        assert_eq!(a.product, "MacBook Pro");
        assert_eq!(b.product, "");
        assert_eq!(a.cpu_type, b.cpu_type);
        assert_eq!(a.ram_gb, 8);
    }
}
