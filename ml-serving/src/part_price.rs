//! Replacement part price estimation.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::artifact::{LinearModelArtifact, round2};
use crate::error_handler::Result;

const MODEL_PATH_VAR: &str = "PART_PRICE_MODEL_PATH";
const MODEL_PATH_DEFAULT: &str = "models/part_price_model.json";

/// One observation for the part price model.
#[derive(Debug, Clone, Deserialize)]
pub struct PartPriceInput {
    pub fault_category: String,
    pub fault_code: String,
    pub region: String,
    pub parts_cost: f64,
}

/// Serves the fitted part price regression.
#[derive(Debug)]
pub struct PartPricePredictor {
    model: LinearModelArtifact,
}

impl PartPricePredictor {
    /// Loads the artifact from `PART_PRICE_MODEL_PATH`, falling back to
    /// `models/part_price_model.json`.
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

    /// Predicts the total price for one repair, rounded to 2 decimals and
    /// clamped at zero.
    ///
    /// # Errors
    /// [`crate::MlServingError::MissingInput`] if the artifact requires a
    /// feature this input does not carry.
    pub fn predict(&self, input: &PartPriceInput) -> Result<f64> {
        let numeric = [("parts_cost", input.parts_cost)];
        let categorical = [
            ("fault_category", input.fault_category.as_str()),
            ("fault_code", input.fault_code.as_str()),
            ("region", input.region.as_str()),
        ];
        Ok(round2(self.model.predict(&numeric, &categorical)?.max(0.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::LinearModelArtifact;

    fn predictor() -> PartPricePredictor {
        let model: LinearModelArtifact = serde_json::from_str(
            r#"{
                "target": "total_cost",
                "intercept": 500.0,
                "numeric_features": [
                    { "name": "parts_cost", "coefficient": 1.1 }
                ],
                "categorical_features": [
                    { "name": "fault_category", "categories": [
                        { "value": "engine", "coefficient": 1200.0 },
                        { "value": "body", "coefficient": -150.0 }
                    ]},
                    { "name": "fault_code", "categories": [
                        { "value": "ENG-001", "coefficient": 300.0 }
                    ]},
                    { "name": "region", "categories": [
                        { "value": "urban", "coefficient": 250.0 }
                    ]}
                ]
            }"#,
        )
        .unwrap();
        PartPricePredictor { model }
    }

    #[test]
    fn predicts_with_all_dummies_hit() {
        let out = predictor()
            .predict(&PartPriceInput {
                fault_category: "engine".into(),
                fault_code: "ENG-001".into(),
                region: "urban".into(),
                parts_cost: 1000.0,
            })
            .unwrap();
        assert_eq!(out, 500.0 + 1100.0 + 1200.0 + 300.0 + 250.0);
    }

    #[test]
    fn unseen_region_aligns_to_zero() {
        let out = predictor()
            .predict(&PartPriceInput {
                fault_category: "body".into(),
                fault_code: "BDY-404".into(),
                region: "offworld".into(),
                parts_cost: 100.0,
            })
            .unwrap();
        assert_eq!(out, 500.0 + 110.0 - 150.0);
    }
}
