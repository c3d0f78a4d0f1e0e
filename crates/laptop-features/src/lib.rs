//! laptop-features: free-form laptop spec strings to a typed feature record.
//!
//! A listing describes its hardware in loosely formatted text:
//! `"IPS Panel Touchscreen 2560x1440"`, `"256GB SSD + 1TB HDD"`,
//! `"Intel Core i7 7700HQ"`. This crate turns one such raw record into the
//! fixed 17-column record a price model is trained on.
//!
//! - **Resolution**: width, height and the touchscreen flag
//! - **Storage**: total size in GB and a coarse storage type
//! - **CPU**: family and generation label
//! - **GPU**: family token
//!
//! Normalization is a pure function. Only an unparsable resolution fails;
//! every other rule falls back to a default category.
//!
//! ```
//! use laptop_features::{normalize, RawSpecRecord};
//!
//! let raw = RawSpecRecord {
//!     company: "Dell".into(),
//!     product: "Inspiron 15".into(),
//!     type_name: "Notebook".into(),
//!     inches: 15.6,
//!     screen_resolution: "Full HD 1920x1080".into(),
//!     cpu_company: "Intel".into(),
//!     cpu_type: "Core i5 7200U".into(),
//!     cpu_frequency_ghz: 2.5,
//!     ram_gb: 8,
//!     memory: "256GB SSD".into(),
//!     gpu_company: "Intel".into(),
//!     gpu_type: "HD Graphics 620".into(),
//!     op_sys: "Windows 10".into(),
//!     weight_kg: 2.0,
//! };
//!
//! let features = normalize(&raw).unwrap();
//! assert_eq!(features.screen_width, 1920);
//! assert_eq!(features.cpu_gen_family, "I5");
//! assert_eq!(features.gpu_family, "hd");
//! ```

pub mod cpu;
pub mod error;
pub mod gpu;
pub mod normalize;
pub mod record;
pub mod resolution;
pub mod rules;
pub mod schema;
pub mod storage;

pub use cpu::*;
pub use error::*;
pub use gpu::*;
pub use normalize::*;
pub use record::*;
pub use resolution::*;
pub use schema::*;
pub use storage::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
