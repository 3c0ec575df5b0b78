//! Linear bag-of-words sentiment classifier.
//!
//! [`LinearTextClassifier`] is a multinomial logistic regression over lowercase
//! word tokens. Its weights come from a JSON artifact produced offline:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "labels": ["negative", "positive"],
//!   "bias": [0.1, -0.1],
//!   "weights": { "love": [-1.4, 1.9], "awful": [2.1, -1.7] }
//! }
//! ```

mod artifact;
mod classifier;

pub use artifact::ModelArtifact;
pub use classifier::{tokenize, LinearTextClassifier};

use thiserror::Error;

/// Errors from loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}
