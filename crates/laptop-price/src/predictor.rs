//! Price estimation with an injected model.
//!
//! The model is whatever the caller loaded; this module only guarantees that
//! it sees normalized input and is never consulted for a rejected record.

use laptop_features::{normalize, NormalizedFeatureRecord, RawSpecRecord};
use serde::{Deserialize, Serialize};

use crate::{PredictionError, Result};

/// A loaded price model.
pub trait PricePredictor {
    /// Estimated price for one feature record.
    fn predict(
        &self,
        features: &NormalizedFeatureRecord,
    ) -> std::result::Result<f64, PredictionError>;
}

impl<F> PricePredictor for F
where
    F: Fn(&NormalizedFeatureRecord) -> std::result::Result<f64, PredictionError>,
{
    fn predict(
        &self,
        features: &NormalizedFeatureRecord,
    ) -> std::result::Result<f64, PredictionError> {
        self(features)
    }
}

/// Features and the price the model assigned to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub features: NormalizedFeatureRecord,
    /// Model output, in the currency the model was trained on
    pub price: f64,
}

/// Normalize `raw` and hand it to `predictor`.
pub fn estimate_price<P>(raw: &RawSpecRecord, predictor: &P) -> Result<PriceEstimate>
where
    P: PricePredictor + ?Sized,
{
    let features = normalize(raw)?;
    tracing::debug!(
        company = %features.company,
        cpu_family = %features.cpu_family,
        storage_type = %features.storage_type,
        "Normalized record, running predictor"
    );

    let price = predictor.predict(&features)?;
    if !price.is_finite() {
        return Err(PredictionError::NonFinite(price).into());
    }

    Ok(PriceEstimate { features, price })
}
