//! CSV batch normalization.
//!
//! Input rows use the dataset column names (`Company`, `TypeName`,
//! `CPU_Frequency (GHz)`, ...); extra columns such as a row id are ignored.
//! Output rows follow [`FEATURE_COLUMNS`].

use std::io::{Read, Write};

use laptop_features::{
    normalize, FeatureError, NormalizedFeatureRecord, RawSpecRecord, FEATURE_COLUMNS,
};

use crate::{BatchConfig, PriceError, Result};

/// Batch behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Return an error on the first rejected row
    pub stop_on_error: bool,
}

impl From<&BatchConfig> for BatchOptions {
    fn from(config: &BatchConfig) -> Self {
        Self {
            stop_on_error: config.stop_on_error,
        }
    }
}

/// A row the normalizer refused.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line in the input, header included
    pub line: u64,
    pub error: FeatureError,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub records: Vec<NormalizedFeatureRecord>,
    pub rejected: Vec<RejectedRow>,
}

impl BatchReport {
    pub fn total_rows(&self) -> usize {
        self.records.len() + self.rejected.len()
    }
}

/// Normalize every row of a CSV dataset.
///
/// Rows that fail normalization are logged and collected in
/// [`BatchReport::rejected`] unless `stop_on_error` is set. Malformed CSV
/// (wrong column types, missing required columns) is always an error.
pub fn normalize_csv<R: Read>(reader: R, options: &BatchOptions) -> Result<BatchReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut report = BatchReport::default();
    let mut row = csv::StringRecord::new();

    while rdr.read_record(&mut row)? {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawSpecRecord = row.deserialize(Some(&headers))?;

        match normalize(&raw) {
            Ok(features) => report.records.push(features),
            Err(source) if options.stop_on_error => {
                return Err(PriceError::Row { line, source });
            }
            Err(error) => {
                tracing::warn!(line, product = %raw.product, "Skipping row: {}", error);
                report.rejected.push(RejectedRow { line, error });
            }
        }
    }

    tracing::info!(
        normalized = report.records.len(),
        rejected = report.rejected.len(),
        "Batch normalized"
    );
    Ok(report)
}

/// Write feature records as CSV in model-input column order.
///
/// The touchscreen flag is written as `1`/`0`.
pub fn write_features_csv<W: Write>(
    writer: W,
    records: &[NormalizedFeatureRecord],
    write_header: bool,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    if write_header {
        wtr.write_record(FEATURE_COLUMNS)?;
    }
    for record in records {
        wtr.write_record(record.to_row().iter().map(|value| value.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
