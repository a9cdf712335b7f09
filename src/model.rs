use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sanitize::FieldValue;
use crate::schema::Schema;

// ---------------------------------------------------------------------------
// Scoring boundary
// ---------------------------------------------------------------------------

/// Sanitized rows in schema column order, ready for scoring.
#[derive(Debug)]
pub struct TabularBatch<'a> {
    pub schema: &'a Schema,
    pub rows: Vec<Vec<FieldValue>>,
}

/// One model output per input row.
#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    /// A class label plus a probability per class.
    Classified {
        class: String,
        probabilities: Vec<f64>,
    },
    /// A bare score with no class information.
    Scalar(f64),
}

impl Prediction {
    /// Probability of the positive class: the second probability when a
    /// vector is available, else the bare scalar. `None` when a classified
    /// prediction carries fewer than two probabilities.
    pub fn probability_yes(&self) -> Option<f64> {
        match self {
            Prediction::Classified { probabilities, .. } => probabilities.get(1).copied(),
            Prediction::Scalar(v) => Some(*v),
        }
    }

    /// The predicted class label, when the model produced one.
    pub fn class(&self) -> Option<&str> {
        match self {
            Prediction::Classified { class, .. } => Some(class.as_str()),
            Prediction::Scalar(_) => None,
        }
    }
}

/// The pre-trained scoring engine, kept behind a narrow trait so the
/// pipeline can be exercised with a stub and real engines can plug in
/// without touching the I/O or sanitization code.
pub trait Model {
    /// Score a batch, returning exactly one prediction per input row.
    fn predict(&self, batch: &TabularBatch) -> Result<Vec<Prediction>>;
}

// ---------------------------------------------------------------------------
// Baseline artifact
// ---------------------------------------------------------------------------

/// A constant-probability baseline: every row gets the same positive-class
/// probability (and class label, when one is configured).
///
/// This is the one artifact the crate can deserialize itself; it exists to
/// wire and smoke-test the scoring pipeline. Production engines implement
/// [`Model`] directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BaselineModel {
    /// Positive-class probability assigned to every row.
    pub probability_yes: f64,
    /// Class label to emit; `None` makes the model emit bare scalars.
    #[serde(default)]
    pub class: Option<String>,
}

impl Model for BaselineModel {
    fn predict(&self, batch: &TabularBatch) -> Result<Vec<Prediction>> {
        let prediction = match &self.class {
            Some(class) => Prediction::Classified {
                class: class.clone(),
                probabilities: vec![1.0 - self.probability_yes, self.probability_yes],
            },
            None => Prediction::Scalar(self.probability_yes),
        };
        Ok(vec![prediction; batch.rows.len()])
    }
}

/// Load a model artifact from disk.
///
/// The artifact's bytes are inspected, not its extension: currently the JSON
/// [`BaselineModel`] form is the only one understood, and anything else is
/// reported as unreadable with context.
pub fn load_model(path: &Path) -> Result<Box<dyn Model>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading model artifact '{}'", path.display()))?;
    let baseline: BaselineModel = serde_json::from_str(&text)
        .with_context(|| format!("parsing model artifact '{}'", path.display()))?;
    Ok(Box::new(baseline))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::schema::Feature;

    fn batch_of(schema: &Schema, n: usize) -> TabularBatch<'_> {
        TabularBatch {
            schema,
            rows: vec![vec![FieldValue::Continuous(1.0)]; n],
        }
    }

    #[test]
    fn classified_prediction_exposes_second_probability() {
        let p = Prediction::Classified {
            class: "yes".into(),
            probabilities: vec![0.3, 0.7],
        };
        assert_eq!(p.probability_yes(), Some(0.7));
        assert_eq!(p.class(), Some("yes"));
    }

    #[test]
    fn scalar_prediction_has_no_class() {
        let p = Prediction::Scalar(0.42);
        assert_eq!(p.probability_yes(), Some(0.42));
        assert_eq!(p.class(), None);
    }

    #[test]
    fn short_probability_vector_yields_none() {
        let p = Prediction::Classified {
            class: "yes".into(),
            probabilities: vec![1.0],
        };
        assert_eq!(p.probability_yes(), None);
    }

    #[test]
    fn baseline_scores_every_row_identically() {
        let schema = Schema::new(vec![Feature::continuous("x")]);
        let model = BaselineModel {
            probability_yes: 0.8,
            class: Some("yes".into()),
        };
        let predictions = model.predict(&batch_of(&schema, 3)).unwrap();
        assert_eq!(predictions.len(), 3);
        assert_eq!(predictions[2].probability_yes(), Some(0.8));
        assert_eq!(predictions[0].class(), Some("yes"));
    }

    #[test]
    fn load_model_reads_json_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"probability_yes": 0.25}}"#).unwrap();

        let schema = Schema::new(vec![Feature::continuous("x")]);
        let model = load_model(file.path()).unwrap();
        let predictions = model.predict(&batch_of(&schema, 1)).unwrap();
        assert_eq!(predictions[0], Prediction::Scalar(0.25));
    }

    #[test]
    fn load_model_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not an artifact").unwrap();
        assert!(load_model(file.path()).is_err());
    }
}
