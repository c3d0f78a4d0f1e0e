//! Raw record to feature record.

use serde::{Deserialize, Serialize};

use crate::{
    parse_cpu, parse_gpu, parse_resolution, parse_storage, FeatureError, NormalizedFeatureRecord,
    RawSpecRecord, Result,
};

/// Intermediate values computed while normalizing that are not part of
/// the feature record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct NormalizationDiagnostics {
    /// First integer in the GPU model string, 0 when absent
    pub gpu_model_number: u64,
    /// First integer in the storage description, before TB scaling
    pub storage_magnitude: f64,
    /// Whether the storage description was read as terabytes
    pub storage_in_terabytes: bool,
}

/// Normalize one raw record into the model's feature record.
///
/// Fails only when the resolution has no usable `<width>x<height>` pair.
/// Inches, CPU frequency, RAM and weight are copied as given; range checks
/// belong to whoever collects the input.
pub fn normalize(raw: &RawSpecRecord) -> Result<NormalizedFeatureRecord> {
    normalize_with_diagnostics(raw).map(|(record, _)| record)
}

/// [`normalize`], also returning the values dropped from the record.
pub fn normalize_with_diagnostics(
    raw: &RawSpecRecord,
) -> Result<(NormalizedFeatureRecord, NormalizationDiagnostics)> {
    let resolution = parse_resolution(&raw.screen_resolution)?;

    let storage = parse_storage(&raw.memory);
    let cpu = parse_cpu(&raw.cpu_type);
    let gpu = parse_gpu(&raw.gpu_type);

    let record = NormalizedFeatureRecord {
        company: raw.company.to_lowercase(),
        type_name: raw.type_name.to_lowercase(),
        inches: raw.inches,
        cpu_company: raw.cpu_company.to_lowercase(),
        cpu_frequency_ghz: raw.cpu_frequency_ghz,
        ram_gb: raw.ram_gb,
        gpu_company: raw.gpu_company.to_lowercase(),
        op_sys: raw.op_sys.to_lowercase(),
        weight_kg: raw.weight_kg,
        total_storage_gb: storage.total_gb,
        storage_type: storage.storage_type,
        is_touchscreen: resolution.is_touchscreen,
        screen_width: resolution.width,
        screen_height: resolution.height,
        cpu_family: cpu.family,
        cpu_gen_family: cpu.generation,
        gpu_family: gpu.family,
    };

    let diagnostics = NormalizationDiagnostics {
        gpu_model_number: gpu.model_number,
        storage_magnitude: storage.magnitude,
        storage_in_terabytes: storage.terabytes,
    };

    Ok((record, diagnostics))
}

/// Owned-argument entry point for foreign callers.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn normalize_record(
    raw: RawSpecRecord,
) -> std::result::Result<NormalizedFeatureRecord, FeatureError> {
    normalize(&raw)
}
