//! Predictor seam and its output type.

use serde::{Deserialize, Serialize};

use crate::PredictorError;

/// Probability assigned to a single label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// A classification result: the chosen label and the full distribution.
///
/// `label` is always the argmax of `distribution`, so both come from the
/// same model invocation and can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub distribution: Vec<LabelScore>,
}

impl Prediction {
    /// Builds a prediction from per-label probabilities, in label order.
    ///
    /// Ties resolve to the earliest label.
    pub fn from_scores(labels: &[String], scores: Vec<f64>) -> Result<Self, PredictorError> {
        if labels.is_empty() {
            return Err(PredictorError::InvalidOutput("empty label set".into()));
        }
        if labels.len() != scores.len() {
            return Err(PredictorError::InvalidOutput(format!(
                "expected {} scores, got {}",
                labels.len(),
                scores.len()
            )));
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite() || !(0.0..=1.0).contains(*s)) {
            return Err(PredictorError::InvalidOutput(format!("score out of range: {}", bad)));
        }

        let mut best = 0;
        for (idx, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = idx;
            }
        }

        let distribution = labels
            .iter()
            .zip(scores)
            .map(|(label, score)| LabelScore { label: label.clone(), score })
            .collect();

        Ok(Self {
            label: labels[best].clone(),
            distribution,
        })
    }

    /// Highest probability in the distribution.
    pub fn confidence(&self) -> f64 {
        self.distribution
            .iter()
            .map(|s| s.score)
            .fold(0.0, f64::max)
    }

    /// Label with the highest probability, first one on ties.
    pub fn argmax(&self) -> Option<&str> {
        let mut best: Option<&LabelScore> = None;
        for entry in &self.distribution {
            if best.map_or(true, |b| entry.score > b.score) {
                best = Some(entry);
            }
        }
        best.map(|b| b.label.as_str())
    }
}

/// Metadata describing a loaded predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub version: String,
    pub labels: Vec<String>,
    pub vocabulary_size: usize,
}

/// A pretrained text classifier.
///
/// Implementations are loaded once and shared read-only across requests;
/// `classify` must not mutate model state.
pub trait Predictor: Send + Sync {
    /// Labels this predictor can emit, in distribution order.
    fn labels(&self) -> &[String];

    /// Scores `text`, returning the label and its distribution in one call.
    fn classify(&self, text: &str) -> Result<Prediction, PredictorError>;

    /// Describes the loaded model.
    fn info(&self) -> ModelInfo {
        ModelInfo {
            version: "unknown".to_string(),
            labels: self.labels().to_vec(),
            vocabulary_size: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["negative".to_string(), "neutral".to_string(), "positive".to_string()]
    }

    #[test]
    fn test_label_is_argmax() {
        let prediction = Prediction::from_scores(&labels(), vec![0.2, 0.1, 0.7]).unwrap();
        assert_eq!(prediction.label, "positive");
        assert_eq!(prediction.argmax(), Some("positive"));
        assert_eq!(prediction.confidence(), 0.7);
        assert_eq!(prediction.distribution.len(), 3);
    }

    #[test]
    fn test_ties_pick_first_label() {
        let prediction = Prediction::from_scores(&labels(), vec![0.4, 0.4, 0.2]).unwrap();
        assert_eq!(prediction.label, "negative");
        assert_eq!(prediction.argmax(), Some("negative"));
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = Prediction::from_scores(&labels(), vec![0.5, 0.5]).unwrap_err();
        assert!(matches!(err, PredictorError::InvalidOutput(_)));
    }

    #[test]
    fn test_rejects_out_of_range_scores() {
        assert!(Prediction::from_scores(&labels(), vec![1.2, 0.0, 0.0]).is_err());
        assert!(Prediction::from_scores(&labels(), vec![f64::NAN, 0.5, 0.5]).is_err());
        assert!(Prediction::from_scores(&[], vec![]).is_err());
    }
}
