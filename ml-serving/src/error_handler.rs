//! Unified error types for artifact loading and evaluation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MlServingError>;

/// Errors produced while loading or evaluating a model artifact.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MlServingError {
    /// The artifact file could not be read.
    #[error("[ML Serving] failed to read artifact `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file is not valid JSON for the expected schema.
    #[error("[ML Serving] failed to parse artifact `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact declares no features at all.
    #[error("[ML Serving] artifact for `{0}` has no features")]
    EmptyModel(String),

    /// The caller did not supply a value for a feature the model requires.
    #[error("[ML Serving] missing input for feature `{0}`")]
    MissingInput(String),
}
