//! laptop-price: glue between raw laptop listings and a price model.
//!
//! - **predictor**: [`PricePredictor`] and [`estimate_price`], with the model
//!   passed in by the caller
//! - **batch**: normalize CSV datasets and write feature CSVs
//! - **config**: TOML/JSON tool configuration
//!
//! Normalization itself lives in [`laptop_features`].

pub mod batch;
pub mod config;
pub mod error;
pub mod predictor;

pub use batch::*;
pub use config::*;
pub use error::*;
pub use predictor::*;
