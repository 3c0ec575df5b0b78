//! Serialized model format.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// On-disk representation of a [`crate::LinearTextClassifier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_version")]
    pub version: String,
    pub labels: Vec<String>,
    pub bias: Vec<f64>,
    #[serde(default)]
    pub weights: HashMap<String, Vec<f64>>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
}

fn default_version() -> String {
    "unversioned".to_string()
}

fn default_true() -> bool {
    true
}

impl ModelArtifact {
    /// Checks shape and value constraints before the artifact is used.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.labels.len() < 2 {
            return Err(ModelError::Invalid(format!(
                "need at least two labels, found {}",
                self.labels.len()
            )));
        }

        let mut seen = HashSet::new();
        for label in &self.labels {
            if label.trim().is_empty() {
                return Err(ModelError::Invalid("blank label".into()));
            }
            if !seen.insert(label.as_str()) {
                return Err(ModelError::Invalid(format!("duplicate label: {}", label)));
            }
        }

        let width = self.labels.len();
        if self.bias.len() != width {
            return Err(ModelError::Invalid(format!(
                "bias has {} entries, expected {}",
                self.bias.len(),
                width
            )));
        }
        if self.bias.iter().any(|b| !b.is_finite()) {
            return Err(ModelError::Invalid("non-finite bias".into()));
        }

        let mut normalized = HashSet::new();
        for (token, row) in &self.weights {
            if self.lowercase && !normalized.insert(token.to_lowercase()) {
                return Err(ModelError::Invalid(format!(
                    "duplicate token after lowercasing: {}",
                    token.to_lowercase()
                )));
            }
            if row.len() != width {
                return Err(ModelError::Invalid(format!(
                    "weights for '{}' have {} entries, expected {}",
                    token,
                    row.len(),
                    width
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(ModelError::Invalid(format!("non-finite weight for '{}'", token)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(json: &str) -> ModelArtifact {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let a = artifact(r#"{"labels": ["neg", "pos"], "bias": [0.0, 0.0]}"#);
        assert_eq!(a.version, "unversioned");
        assert!(a.lowercase);
        assert!(a.weights.is_empty());
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let single = artifact(r#"{"labels": ["pos"], "bias": [0.0]}"#);
        assert!(matches!(single.validate(), Err(ModelError::Invalid(_))));

        let dup = artifact(r#"{"labels": ["pos", "pos"], "bias": [0.0, 0.0]}"#);
        assert!(dup.validate().is_err());

        let bias = artifact(r#"{"labels": ["neg", "pos"], "bias": [0.0]}"#);
        assert!(bias.validate().is_err());

        let row = artifact(r#"{"labels": ["neg", "pos"], "bias": [0.0, 0.0], "weights": {"good": [1.0]}}"#);
        assert!(row.validate().is_err());
    }

    #[test]
    fn test_rejects_tokens_colliding_after_lowercasing() {
        let a = artifact(
            r#"{"labels": ["neg", "pos"], "bias": [0.0, 0.0], "weights": {"Good": [5.0, -5.0], "good": [-5.0, 5.0]}}"#,
        );
        match a.validate() {
            Err(ModelError::Invalid(msg)) => assert_eq!(msg, "duplicate token after lowercasing: good"),
            other => panic!("expected Invalid, got {:?}", other),
        }

        let case_sensitive = artifact(
            r#"{"labels": ["neg", "pos"], "bias": [0.0, 0.0], "lowercase": false, "weights": {"Good": [5.0, -5.0], "good": [-5.0, 5.0]}}"#,
        );
        assert!(case_sensitive.validate().is_ok());
    }
}
