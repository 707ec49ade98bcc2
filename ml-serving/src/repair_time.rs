//! Repair duration estimation.
//!
//! Wraps the `repair_hours` artifact and renders the raw hour estimate into
//! the "2 hours 37 minutes" display form the chat surfaces.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::artifact::{LinearModelArtifact, round2};
use crate::error_handler::Result;

const MODEL_PATH_VAR: &str = "REPAIR_TIME_MODEL_PATH";
const MODEL_PATH_DEFAULT: &str = "models/repair_time_model.json";

/// One observation for the repair time model.
#[derive(Debug, Clone, Deserialize)]
pub struct RepairTimeInput {
    pub fault_category: String,
    pub fault_name: String,
    pub severity: String,
    pub parts_count: u32,
}

/// Estimate in raw hours plus the human-readable rendering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RepairTimeEstimate {
    pub hours: f64,
    pub display: String,
}

/// Serves the fitted repair time regression.
#[derive(Debug)]
pub struct RepairTimePredictor {
    model: LinearModelArtifact,
}

impl RepairTimePredictor {
    /// Loads the artifact from `REPAIR_TIME_MODEL_PATH`, falling back to
    /// `models/repair_time_model.json`.
    ///
    /// # Errors
    /// Artifact load errors, see [`LinearModelArtifact::load`].
    pub fn from_env() -> Result<Self> {
        let path = env::var(MODEL_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(MODEL_PATH_DEFAULT));
        Self::load(&path)
    }

    /// Loads the artifact from an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self {
            model: LinearModelArtifact::load(path)?,
        })
    }

    /// Predicts the repair duration for one fault.
    ///
    /// # Errors
    /// [`crate::MlServingError::MissingInput`] if the artifact requires a
    /// feature this input does not carry.
    pub fn predict(&self, input: &RepairTimeInput) -> Result<RepairTimeEstimate> {
        let numeric = [("parts_count", f64::from(input.parts_count))];
        let categorical = [
            ("fault_category", input.fault_category.as_str()),
            ("fault_name", input.fault_name.as_str()),
            ("severity", input.severity.as_str()),
        ];
        let hours = round2(self.model.predict(&numeric, &categorical)?.max(0.0));
        Ok(RepairTimeEstimate {
            hours,
            display: format_hours(hours),
        })
    }
}

/// Renders fractional hours as whole hours and minutes.
///
/// Minutes are rounded; a carry at 60 minutes rolls into the hour.
pub fn format_hours(hours: f64) -> String {
    let hours = hours.max(0.0);
    let mut whole = hours.trunc() as u64;
    let mut minutes = ((hours - hours.trunc()) * 60.0).round() as u64;
    if minutes == 60 {
        whole += 1;
        minutes = 0;
    }

    match (whole, minutes) {
        (0, 0) => "0 minutes".to_string(),
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{} {m} minute{}", plural(h), plural(m)),
    }
}

fn plural(n: u64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_only() {
        assert_eq!(format_hours(0.62), "37 minutes");
        assert_eq!(format_hours(0.5), "30 minutes");
    }

    #[test]
    fn formats_whole_hours() {
        assert_eq!(format_hours(1.0), "1 hour");
        assert_eq!(format_hours(3.0), "3 hours");
    }

    #[test]
    fn formats_hours_and_minutes() {
        assert_eq!(format_hours(2.62), "2 hours 37 minutes");
        assert_eq!(format_hours(1.02), "1 hour 1 minute");
    }

    #[test]
    fn carries_sixty_minutes_into_the_hour() {
        // The fractional 0.9999h rounds to 60 minutes, which must carry.
        assert_eq!(format_hours(1.9999), "2 hours");
    }

    #[test]
    fn zero_and_negative_render_zero_minutes() {
        assert_eq!(format_hours(0.0), "0 minutes");
        assert_eq!(format_hours(-0.5), "0 minutes");
    }
}
