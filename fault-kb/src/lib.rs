//! Static vehicle fault knowledge base for the Suzuki Alto (2010–2025).
//!
//! Everything in this crate is reference data plus two lookup rules:
//! - [`match_fault`] — map an observed symptom set to the closest fault
//!   record inside a category (severity-ordered, 60% overlap threshold).
//! - [`assess_drivability`] — decide whether the car is safe to drive by
//!   checking three rule tiers in fixed priority order.
//!
//! The catalog itself lives in [`catalog`], the drivability tiers in
//! [`drivability`], and the dashboard warning-light reference in
//! [`warning_lights`].

pub mod catalog;
pub mod drivability;
pub mod matcher;
pub mod warning_lights;

pub use catalog::{CategoryEntry, FaultCategory, FaultRecord, Severity, detect_category};
pub use drivability::{DrivabilityAssessment, DrivabilityRule, Urgency, assess_drivability};
pub use matcher::{FaultMatch, match_fault};
pub use warning_lights::{WarningLight, warning_light_by_name};

use std::collections::HashSet;

/// Accumulated set of observed symptom flags for one conversation.
///
/// Flags are plain snake_case tags (`"soft_pedal"`, `"engine_stopped"`).
/// Insertion only; a flag never turns back off during a session.
pub type SymptomSet = HashSet<String>;
