//! GPU family extraction.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Family used for an empty GPU model string.
pub const UNKNOWN_GPU_FAMILY: &str = "others";

lazy_static! {
    static ref MODEL_NUMBER_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Family token and model number read from one GPU model string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GpuSpec {
    /// Lowercased first word, e.g. `"geforce"` for `"GeForce GTX 1050"`
    pub family: String,
    /// First integer in the string, 0 when there is none.
    /// Diagnostic only; not a model input.
    pub model_number: u64,
}

/// Parse a GPU model string such as `"HD Graphics 620"`.
///
/// The vendor lives in the separate GPU company field, so the family is
/// whatever word the model string starts with.
pub fn parse_gpu(input: &str) -> GpuSpec {
    let family = input
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_else(|| UNKNOWN_GPU_FAMILY.to_string());

    let model_number = MODEL_NUMBER_REGEX
        .find(input)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    GpuSpec {
        family,
        model_number,
    }
}
