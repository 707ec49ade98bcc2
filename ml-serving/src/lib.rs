//! In-process serving of the trained regression artifacts.
//!
//! The training pipeline exports each fitted linear model as a JSON artifact
//! (intercept plus per-feature coefficients, with one-hot weights spelled out
//! per category value). This crate loads those artifacts at startup and
//! evaluates them directly, so no Python runtime is involved at serve time.
//!
//! Two estimators are exposed:
//! - [`repair_time::RepairTimePredictor`] — repair duration in hours
//! - [`part_price::PartPricePredictor`]   — replacement part cost

pub mod artifact;
pub mod error_handler;
pub mod part_price;
pub mod repair_time;

pub use artifact::LinearModelArtifact;
pub use error_handler::{MlServingError, Result};
pub use part_price::{PartPriceInput, PartPricePredictor};
pub use repair_time::{RepairTimeEstimate, RepairTimeInput, RepairTimePredictor};
