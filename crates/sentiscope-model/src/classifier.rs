//! Inference for the linear bag-of-words model.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sentiscope_core::{ModelInfo, Prediction, Predictor, PredictorError};
use tracing::info;

use crate::{ModelArtifact, ModelError};

/// Splits text into word tokens. Apostrophes stay inside words ("don't").
pub fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| if lowercase { t.to_lowercase() } else { t.to_string() })
        .collect()
}

/// Multinomial logistic regression over token counts.
///
/// Immutable after construction, so one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct LinearTextClassifier {
    version: String,
    labels: Vec<String>,
    bias: Vec<f64>,
    weights: HashMap<String, Vec<f64>>,
    lowercase: bool,
}

impl LinearTextClassifier {
    /// Reads and validates an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        let model = Self::from_artifact(artifact)?;
        info!(
            "Loaded model {} from {} ({} labels, {} tokens)",
            model.version,
            path.display(),
            model.labels.len(),
            model.weights.len()
        );
        Ok(model)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        artifact.validate()?;
        let lowercase = artifact.lowercase;
        let weights = artifact
            .weights
            .into_iter()
            .map(|(token, row)| (if lowercase { token.to_lowercase() } else { token }, row))
            .collect();

        Ok(Self {
            version: artifact.version,
            labels: artifact.labels,
            bias: artifact.bias,
            weights,
            lowercase,
        })
    }

    fn logits(&self, text: &str) -> Vec<f64> {
        let mut logits = self.bias.clone();
        for token in tokenize(text, self.lowercase) {
            if let Some(row) = self.weights.get(&token) {
                for (acc, w) in logits.iter_mut().zip(row) {
                    *acc += w;
                }
            }
        }
        logits
    }
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

impl Predictor for LinearTextClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn classify(&self, text: &str) -> Result<Prediction, PredictorError> {
        let logits = self.logits(text);
        if logits.iter().any(|l| !l.is_finite()) {
            return Err(PredictorError::Inference("logits overflowed".into()));
        }
        Prediction::from_scores(&self.labels, softmax(&logits))
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            version: self.version.clone(),
            labels: self.labels.clone(),
            vocabulary_size: self.weights.len(),
        }
    }
}
