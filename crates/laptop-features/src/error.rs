//! Error types for laptop-features

use thiserror::Error;

/// Result type alias for normalization
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Reasons a raw record cannot be normalized.
///
/// Any of these is terminal for the record: no feature record is produced
/// and the caller must not go on to predict.
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum FeatureError {
    /// No `<width>x<height>` pair in the resolution string
    #[error("Unparsable screen resolution {0:?}: expected <width>x<height>, e.g. 1920x1080")]
    Resolution(String),

    /// Dimension pair found but not a positive integer that fits
    #[error("Invalid screen {axis} {value:?} in resolution {input:?}")]
    Dimension {
        axis: &'static str,
        value: String,
        input: String,
    },
}
