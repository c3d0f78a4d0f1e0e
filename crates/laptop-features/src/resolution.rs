//! Screen resolution parsing.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{FeatureError, Result};

lazy_static! {
    // First `<digits>x<digits>` pair, e.g. "2560x1600" in
    // "IPS Panel Retina Display 2560x1600"
    // ASCII digits only, so every capture parses as u32
    static ref DIMENSIONS_REGEX: Regex =
        Regex::new(r"(?P<width>[0-9]+)[xX](?P<height>[0-9]+)").unwrap();
}

/// Display geometry extracted from a resolution string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ScreenResolution {
    pub width: u32,
    pub height: u32,
    pub is_touchscreen: bool,
}

/// Parse a resolution string such as `"IPS Panel Touchscreen 2560x1440"`.
///
/// The touchscreen flag is set when `touch` appears anywhere, in any case.
/// Width and height come from the first `<digits>x<digits>` pair (`x` or
/// `X`); a string without one is rejected.
///
/// # Examples
/// ```
/// use laptop_features::parse_resolution;
/// let res = parse_resolution("Touchscreen 1920x1080").unwrap();
/// assert_eq!((res.width, res.height, res.is_touchscreen), (1920, 1080, true));
/// assert!(parse_resolution("Full HD").is_err());
/// ```
pub fn parse_resolution(input: &str) -> Result<ScreenResolution> {
    let is_touchscreen = input.to_lowercase().contains("touch");

    let caps = DIMENSIONS_REGEX
        .captures(input)
        .ok_or_else(|| FeatureError::Resolution(input.to_string()))?;

    let width = parse_dimension("width", &caps["width"], input)?;
    let height = parse_dimension("height", &caps["height"], input)?;

    Ok(ScreenResolution {
        width,
        height,
        is_touchscreen,
    })
}

fn parse_dimension(axis: &'static str, digits: &str, input: &str) -> Result<u32> {
    let invalid = || FeatureError::Dimension {
        axis,
        value: digits.to_string(),
        input: input.to_string(),
    };

    match digits.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(n),
    }
}
