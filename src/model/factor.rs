use serde::{Deserialize, Serialize};

/// A numeric quantity tile.
///
/// `value` is the only field that takes part in evaluation. The randomized
/// range is shown to the learner instead of the value when the factor is
/// ranged, but it never feeds into the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factor {
    /// Display label, such as `"Pianos in Chicago"`.
    pub label:            String,
    /// Display unit, such as `"pianos"`.
    #[serde(default)]
    pub unit:             String,
    /// The number used for evaluation.
    pub value:            f64,
    /// Whether the factor is presented as a range instead of a single value.
    #[serde(default)]
    pub is_ranged:        bool,
    /// Lower and upper bound shown for ranged factors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomized_range: Option<(f64, f64)>,
}

impl Factor {
    /// Creates a plain (unranged) factor.
    ///
    /// # Example
    /// ```
    /// use tilecalc::model::Factor;
    ///
    /// let f = Factor::new("Minutes per hour", "min", 60.0);
    /// assert!(!f.is_ranged);
    /// assert_eq!(f.display_range(), None);
    /// ```
    #[must_use]
    pub fn new(label: impl Into<String>, unit: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(),
               unit: unit.into(),
               value,
               is_ranged: false,
               randomized_range: None }
    }

    /// Creates a ranged factor. The display range is left empty until the
    /// owning question is prepared.
    #[must_use]
    pub fn ranged(label: impl Into<String>, unit: impl Into<String>, value: f64) -> Self {
        Self { is_ranged: true,
               ..Self::new(label, unit, value) }
    }

    /// Returns a copy of this factor with `value` replaced. Every other field,
    /// including the display range, is kept as is.
    #[must_use]
    pub fn with_value(&self, value: f64) -> Self {
        Self { value,
               ..self.clone() }
    }

    /// The range to show in place of the value, if the factor is ranged and a
    /// range has been assigned.
    #[must_use]
    pub const fn display_range(&self) -> Option<(f64, f64)> {
        if self.is_ranged { self.randomized_range } else { None }
    }
}
