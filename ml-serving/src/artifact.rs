//! Exported linear model artifacts and their evaluation.
//!
//! Artifact schema (JSON):
//!
//! ```json
//! {
//!   "target": "repair_hours",
//!   "intercept": 0.85,
//!   "numeric_features": [
//!     { "name": "parts_count", "coefficient": 0.4 }
//!   ],
//!   "categorical_features": [
//!     { "name": "severity", "categories": [
//!       { "value": "minor",    "coefficient": 0.0 },
//!       { "value": "moderate", "coefficient": 0.9 },
//!       { "value": "major",    "coefficient": 2.1 }
//!     ]}
//!   ]
//! }
//! ```
//!
//! Categorical features are one-hot encoded: exactly one category weight is
//! added per feature. A value that was never seen during training has no
//! dummy column, so it contributes zero, matching how the training frame is
//! reindexed at fit time.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error_handler::{MlServingError, Result};

/// One numeric model input with its fitted weight.
#[derive(Debug, Clone, Deserialize)]
pub struct NumericFeature {
    pub name: String,
    pub coefficient: f64,
}

/// One dummy-column weight of a one-hot encoded feature.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryWeight {
    pub value: String,
    pub coefficient: f64,
}

/// One categorical model input with its per-value weights.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoricalFeature {
    pub name: String,
    pub categories: Vec<CategoryWeight>,
}

/// A fitted linear regression, as exported by the training pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModelArtifact {
    pub target: String,
    pub intercept: f64,
    #[serde(default)]
    pub numeric_features: Vec<NumericFeature>,
    #[serde(default)]
    pub categorical_features: Vec<CategoricalFeature>,
}

impl LinearModelArtifact {
    /// Loads and validates an artifact from a JSON file.
    ///
    /// # Errors
    /// - [`MlServingError::Io`] if the file cannot be read
    /// - [`MlServingError::Parse`] on malformed JSON
    /// - [`MlServingError::EmptyModel`] if the artifact declares no features
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| MlServingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: Self =
            serde_json::from_str(&raw).map_err(|source| MlServingError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        if artifact.numeric_features.is_empty() && artifact.categorical_features.is_empty() {
            return Err(MlServingError::EmptyModel(artifact.target));
        }

        info!(
            target = %artifact.target,
            numeric = artifact.numeric_features.len(),
            categorical = artifact.categorical_features.len(),
            path = %path.display(),
            "model artifact loaded"
        );
        Ok(artifact)
    }

    /// Evaluates the regression for one observation.
    ///
    /// Every feature the artifact declares must appear in the inputs.
    /// Unseen categorical values contribute zero.
    ///
    /// # Errors
    /// [`MlServingError::MissingInput`] when a declared feature has no value
    /// in `numeric` or `categorical`.
    pub fn predict(&self, numeric: &[(&str, f64)], categorical: &[(&str, &str)]) -> Result<f64> {
        let mut acc = self.intercept;

        for feature in &self.numeric_features {
            let value = numeric
                .iter()
                .find(|(name, _)| *name == feature.name)
                .map(|(_, v)| *v)
                .ok_or_else(|| MlServingError::MissingInput(feature.name.clone()))?;
            acc += feature.coefficient * value;
        }

        for feature in &self.categorical_features {
            let value = categorical
                .iter()
                .find(|(name, _)| *name == feature.name)
                .map(|(_, v)| *v)
                .ok_or_else(|| MlServingError::MissingInput(feature.name.clone()))?;
            // Case-insensitive match against the training vocabulary.
            if let Some(weight) = feature
                .categories
                .iter()
                .find(|c| c.value.eq_ignore_ascii_case(value))
            {
                acc += weight.coefficient;
            }
        }

        Ok(acc)
    }
}

/// Rounds to two decimal places, the precision the estimators report in.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinearModelArtifact {
        serde_json::from_str(
            r#"{
                "target": "repair_hours",
                "intercept": 1.0,
                "numeric_features": [
                    { "name": "parts_count", "coefficient": 0.5 }
                ],
                "categorical_features": [
                    { "name": "severity", "categories": [
                        { "value": "minor", "coefficient": 0.0 },
                        { "value": "major", "coefficient": 2.0 }
                    ]}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn sums_intercept_numeric_and_one_hot() {
        let model = sample();
        let out = model
            .predict(&[("parts_count", 2.0)], &[("severity", "major")])
            .unwrap();
        assert_eq!(out, 4.0);
    }

    #[test]
    fn unseen_category_contributes_zero() {
        let model = sample();
        let out = model
            .predict(&[("parts_count", 2.0)], &[("severity", "catastrophic")])
            .unwrap();
        assert_eq!(out, 2.0);
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let model = sample();
        let out = model
            .predict(&[("parts_count", 0.0)], &[("severity", "Major")])
            .unwrap();
        assert_eq!(out, 3.0);
    }

    #[test]
    fn missing_numeric_input_is_an_error() {
        let model = sample();
        let err = model.predict(&[], &[("severity", "minor")]).unwrap_err();
        assert!(matches!(err, MlServingError::MissingInput(name) if name == "parts_count"));
    }

    #[test]
    fn missing_categorical_input_is_an_error() {
        let model = sample();
        let err = model.predict(&[("parts_count", 1.0)], &[]).unwrap_err();
        assert!(matches!(err, MlServingError::MissingInput(name) if name == "severity"));
    }

    #[test]
    fn artifact_without_features_is_rejected() {
        let raw = r#"{ "target": "x", "intercept": 0.0 }"#;
        let artifact: LinearModelArtifact = serde_json::from_str(raw).unwrap();
        assert!(artifact.numeric_features.is_empty());
        // load() performs the emptiness check; mirror it here.
        assert!(
            artifact.numeric_features.is_empty() && artifact.categorical_features.is_empty()
        );
    }
}
