//! Batch and prediction pipeline tests over the laptop dataset fixture

mod common;

use common::fixtures::{fixture_path, load_fixture};
use laptop_features::{
    CpuFamily, FeatureError, NormalizedFeatureRecord, RawSpecRecord, StorageType, FEATURE_COLUMNS,
};
use laptop_price::{
    estimate_price, normalize_csv, write_features_csv, BatchOptions, PredictionError, PriceError,
};
use rstest::rstest;

fn dataset_report() -> laptop_price::BatchReport {
    let csv = load_fixture("laptops.csv");
    normalize_csv(csv.as_bytes(), &BatchOptions::default()).unwrap()
}

fn find<'a>(
    records: &'a [NormalizedFeatureRecord],
    company: &str,
    width: u32,
) -> &'a NormalizedFeatureRecord {
    records
        .iter()
        .find(|r| r.company == company && r.screen_width == width)
        .unwrap_or_else(|| panic!("no {} record with width {}", company, width))
}

#[test]
fn test_fixture_exists() {
    assert!(fixture_path("laptops.csv").is_file());
}

#[test]
fn test_dataset_rows_and_rejections() {
    let report = dataset_report();
    assert_eq!(report.total_rows(), 10);
    assert_eq!(report.records.len(), 9);
    assert_eq!(report.rejected.len(), 1);

    let rejected = &report.rejected[0];
    assert_eq!(rejected.line, 4);
    assert_eq!(rejected.error, FeatureError::Resolution("Full HD".to_string()));
}

#[rstest]
#[case("apple", 2560, CpuFamily::Core, "I5", StorageType::Ssd, 128.0, false, "iris")]
#[case("asus", 1920, CpuFamily::Core, "I7", StorageType::Ssd, 128.0 * 1024.0, false, "geforce")]
#[case("samsung", 2400, CpuFamily::Cortex, "A72", StorageType::Flash, 32.0, true, "mali")]
#[case("acer", 1920, CpuFamily::Ryzen, "Ryzen 1", StorageType::Ssd, 256.0, false, "radeon")]
#[case("toshiba", 1366, CpuFamily::Core, "Others", StorageType::Hybrid, 1024.0, false, "hd")]
#[allow(clippy::too_many_arguments)]
fn test_dataset_rows(
    #[case] company: &str,
    #[case] width: u32,
    #[case] cpu_family: CpuFamily,
    #[case] cpu_gen: &str,
    #[case] storage_type: StorageType,
    #[case] total_gb: f64,
    #[case] touch: bool,
    #[case] gpu_family: &str,
) {
    let report = dataset_report();
    let record = find(&report.records, company, width);
    assert_eq!(record.cpu_family, cpu_family);
    assert_eq!(record.cpu_gen_family, cpu_gen);
    assert_eq!(record.storage_type, storage_type);
    assert_eq!(record.total_storage_gb, total_gb);
    assert_eq!(record.is_touchscreen, touch);
    assert_eq!(record.gpu_family, gpu_family);
}

#[test]
fn test_emmc_defaults_to_others() {
    let report = dataset_report();
    let record = find(&report.records, "hp", 1366);
    assert_eq!(record.storage_type, StorageType::Others);
    assert_eq!(record.total_storage_gb, 32.0);
    assert_eq!(record.cpu_family, CpuFamily::Others);
}

#[test]
fn test_stop_on_error_reports_line() {
    let csv = load_fixture("laptops.csv");
    let options = BatchOptions {
        stop_on_error: true,
    };
    match normalize_csv(csv.as_bytes(), &options) {
        Err(PriceError::Row { line, source }) => {
            assert_eq!(line, 4);
            assert!(matches!(source, FeatureError::Resolution(_)));
        }
        other => panic!("expected row error, got {:?}", other),
    }
}

#[test]
fn test_feature_csv_file_roundtrip() {
    let report = dataset_report();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("features.csv");

    let file = std::fs::File::create(&path).unwrap();
    write_features_csv(file, &report.records, true).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, FEATURE_COLUMNS);

    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), report.records.len());
    for row in &rows {
        assert_eq!(row.len(), FEATURE_COLUMNS.len());
        assert!(row.iter().all(|cell| !cell.is_empty()));
    }
}

#[test]
fn test_estimate_each_accepted_row() {
    let report = dataset_report();
    let csv = load_fixture("laptops.csv");
    let mut rdr = csv::Reader::from_reader(csv.as_bytes());

    // toy model: price grows with RAM and storage
    let model = |f: &NormalizedFeatureRecord| -> Result<f64, PredictionError> {
        Ok(100.0 + 25.0 * f64::from(f.ram_gb) + 0.1 * f.total_storage_gb)
    };

    let mut estimated = 0;
    let mut rejected = 0;
    for row in rdr.deserialize::<RawSpecRecord>() {
        match estimate_price(&row.unwrap(), &model) {
            Ok(estimate) => {
                assert!(estimate.price > 100.0);
                estimated += 1;
            }
            Err(PriceError::Feature(_)) => rejected += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    assert_eq!(estimated, report.records.len());
    assert_eq!(rejected, report.rejected.len());
}
