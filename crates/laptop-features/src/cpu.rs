//! CPU family and generation extraction.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::rules::KeywordRules;
use crate::CpuFamily;

/// Generation label used when no tier token can be extracted.
pub const OTHER_GENERATION: &str = "Others";

lazy_static! {
    static ref CORE_TIER_REGEX: Regex = Regex::new(r"i[3-9]").unwrap();
    static ref RYZEN_TIER_REGEX: Regex = Regex::new(r"ryzen\s*[0-9]").unwrap();
    static ref CORTEX_TIER_REGEX: Regex = Regex::new(r"a[0-9]+").unwrap();
}

// "core" comes first, so "Pentium Dual Core" strings classify as Core
static CPU_FAMILY_RULES: KeywordRules<CpuFamily> = KeywordRules::new(
    &[
        ("core", CpuFamily::Core),
        ("pentium dual core", CpuFamily::PentiumDualCore),
        ("pentium", CpuFamily::Pentium),
        ("ryzen", CpuFamily::Ryzen),
        ("fx", CpuFamily::Fx),
        ("cortex", CpuFamily::Cortex),
    ],
    CpuFamily::Others,
);

/// Family and generation label read from one CPU model string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CpuSpec {
    pub family: CpuFamily,
    /// Tier token such as `I7`, `Ryzen 5`, `A72` or `FX`
    pub generation: String,
}

/// Classify a CPU model string.
///
/// # Examples
/// ```
/// use laptop_features::{parse_cpu, CpuFamily};
/// let cpu = parse_cpu("AMD Ryzen 5 2500U");
/// assert_eq!(cpu.family, CpuFamily::Ryzen);
/// assert_eq!(cpu.generation, "Ryzen 5");
/// ```
pub fn parse_cpu(input: &str) -> CpuSpec {
    let text = input.to_lowercase();
    let family = CPU_FAMILY_RULES.classify(&text);

    let generation = match family {
        CpuFamily::Core => CORE_TIER_REGEX
            .find(&text)
            .map(|m| m.as_str().to_uppercase()),
        CpuFamily::Ryzen => RYZEN_TIER_REGEX.find(&text).map(|m| title_case(m.as_str())),
        CpuFamily::Fx => Some("FX".to_string()),
        CpuFamily::Cortex => CORTEX_TIER_REGEX
            .find(&text)
            .map(|m| m.as_str().to_uppercase()),
        CpuFamily::PentiumDualCore | CpuFamily::Pentium | CpuFamily::Others => None,
    };

    CpuSpec {
        family,
        generation: generation.unwrap_or_else(|| OTHER_GENERATION.to_string()),
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
