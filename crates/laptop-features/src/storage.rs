//! Storage description parsing.
//!
//! Descriptions look like `"256GB SSD"`, `"1TB HDD"`, `"1.0TB Hybrid"` or
//! compound `"256GB SSD + 1TB HDD"`. Only the first number is read as the
//! size, so a compound description contributes its first drive. The TB
//! check and the type keywords look at the whole string.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::rules::KeywordRules;
use crate::StorageType;

/// GB per TB
pub const GB_PER_TB: f64 = 1024.0;

lazy_static! {
    static ref FIRST_NUMBER_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

static STORAGE_TYPE_RULES: KeywordRules<StorageType> = KeywordRules::new(
    &[
        ("ssd", StorageType::Ssd),
        ("hdd", StorageType::Hdd),
        ("flash", StorageType::Flash),
        ("hybrid", StorageType::Hybrid),
    ],
    StorageType::Others,
);

/// Size and type read from one storage description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct StorageSpec {
    /// Size in GB after TB scaling
    pub total_gb: f64,
    pub storage_type: StorageType,
    /// First number in the description, before scaling
    pub magnitude: f64,
    pub terabytes: bool,
}

/// Parse a storage description. Never fails: no number gives 0 GB and no
/// known keyword gives [`StorageType::Others`].
///
/// # Examples
/// ```
/// use laptop_features::{parse_storage, StorageType};
/// let spec = parse_storage("1TB HDD");
/// assert_eq!(spec.total_gb, 1024.0);
/// assert_eq!(spec.storage_type, StorageType::Hdd);
/// ```
pub fn parse_storage(input: &str) -> StorageSpec {
    let text = input.to_lowercase();

    let magnitude = FIRST_NUMBER_REGEX
        .find(&text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    let terabytes = text.contains("tb");
    let total_gb = if terabytes {
        magnitude * GB_PER_TB
    } else {
        magnitude
    };

    StorageSpec {
        total_gb,
        storage_type: STORAGE_TYPE_RULES.classify(&text),
        magnitude,
        terabytes,
    }
}
