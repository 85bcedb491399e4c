use std::{fs, path::Path};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::QuestionError, model::Factor};

/// Lower bound multiplier interval for randomized display ranges.
pub const LOW_SPREAD: (f64, f64) = (0.5, 0.9);
/// Upper bound multiplier interval for randomized display ranges.
pub const HIGH_SPREAD: (f64, f64) = (1.1, 1.5);

/// A question put to the learner: a prompt and the factors available to
/// answer it. The payload is read-only for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt shown above the tile banks.
    pub prompt:  String,
    /// The factor bank, in display order.
    pub factors: Vec<Factor>,
}

impl Question {
    /// Builds a question from a prompt and its factor bank.
    #[must_use]
    pub fn new(prompt: impl Into<String>, factors: Vec<Factor>) -> Self {
        Self { prompt: prompt.into(),
               factors }
    }

    /// Parses and checks a question payload.
    ///
    /// # Errors
    /// [`QuestionError::Json`] for malformed JSON, or any error reported by
    /// [`Question::check`].
    ///
    /// # Example
    /// ```
    /// use tilecalc::question::Question;
    ///
    /// let q = Question::from_json(r#"{
    ///     "prompt": "How many seconds are in a day?",
    ///     "factors": [
    ///         { "label": "Hours per day", "unit": "h", "value": 24 },
    ///         { "label": "Seconds per hour", "unit": "s", "value": 3600, "isRanged": true }
    ///     ]
    /// }"#).unwrap();
    ///
    /// assert_eq!(q.factors.len(), 2);
    /// assert!(q.factors[1].is_ranged);
    /// ```
    pub fn from_json(payload: &str) -> Result<Self, QuestionError> {
        let question: Self = serde_json::from_str(payload)?;
        question.check()?;
        Ok(question)
    }

    /// Reads a question payload from a JSON file.
    ///
    /// # Errors
    /// [`QuestionError::Io`] if the file cannot be read, otherwise as
    /// [`Question::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuestionError> {
        let path = path.as_ref();
        let payload = fs::read_to_string(path).map_err(|source| {
                                                   QuestionError::Io { path: path.display()
                                                                                 .to_string(),
                                                                       source }
                                               })?;
        debug!(path = %path.display(), "loaded question payload");
        Self::from_json(&payload)
    }

    /// Checks that the payload can drive a session.
    ///
    /// # Errors
    /// - [`QuestionError::EmptyFactorBank`] if there are no factors.
    /// - [`QuestionError::NonFiniteValue`] if a factor value is NaN or
    ///   infinite.
    /// - [`QuestionError::ReversedRange`] if a given range is upside down.
    pub fn check(&self) -> Result<(), QuestionError> {
        if self.factors.is_empty() {
            return Err(QuestionError::EmptyFactorBank);
        }

        for factor in &self.factors {
            if !factor.value.is_finite() {
                return Err(QuestionError::NonFiniteValue { label: factor.label.clone() });
            }
            if let Some((low, high)) = factor.randomized_range
               && low > high
            {
                return Err(QuestionError::ReversedRange { label: factor.label.clone(),
                                                          low,
                                                          high });
            }
        }

        Ok(())
    }

    /// Assigns display ranges using the thread-local random generator.
    #[must_use]
    pub fn prepare(self) -> Self {
        self.prepare_with(&mut rand::thread_rng())
    }

    /// Assigns a randomized display range to every ranged factor that does
    /// not have one yet.
    ///
    /// The range always brackets the factor's value. The value itself is never
    /// touched, and unranged factors and ranges given in the payload are kept.
    ///
    /// # Example
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use tilecalc::{model::Factor, question::Question};
    ///
    /// let q = Question::new("?", vec![Factor::ranged("People", "", 120.0)]);
    /// let q = q.prepare_with(&mut StdRng::seed_from_u64(7));
    ///
    /// let (low, high) = q.factors[0].display_range().unwrap();
    /// assert!(low <= 120.0 && 120.0 <= high);
    /// assert_eq!(q.factors[0].value, 120.0);
    /// ```
    #[must_use]
    pub fn prepare_with<R: Rng>(mut self, rng: &mut R) -> Self {
        for factor in &mut self.factors {
            if factor.is_ranged && factor.randomized_range.is_none() {
                let range = randomized_range(factor.value, rng);
                debug!(label = %factor.label, low = range.0, high = range.1, "assigned display range");
                factor.randomized_range = Some(range);
            }
        }
        self
    }
}

fn randomized_range<R: Rng>(value: f64, rng: &mut R) -> (f64, f64) {
    let low = value * rng.gen_range(LOW_SPREAD.0..=LOW_SPREAD.1);
    let high = value * rng.gen_range(HIGH_SPREAD.0..=HIGH_SPREAD.1);
    if low <= high { (low, high) } else { (high, low) }
}
