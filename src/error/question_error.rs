#[derive(Debug)]
/// Represents all errors that can occur while loading a question.
pub enum QuestionError {
    /// The question file could not be read.
    Io {
        /// Path that was read.
        path:   String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The payload is not valid question JSON.
    Json(serde_json::Error),
    /// The question offers no factors.
    EmptyFactorBank,
    /// A factor value is NaN or infinite.
    NonFiniteValue {
        /// Label of the offending factor.
        label: String,
    },
    /// A factor's display range has its lower bound above its upper bound.
    ReversedRange {
        /// Label of the offending factor.
        label: String,
        /// The lower bound as given.
        low:   f64,
        /// The upper bound as given.
        high:  f64,
    },
}

impl std::fmt::Display for QuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read question file '{path}': {source}.")
            },
            Self::Json(e) => write!(f, "Malformed question payload: {e}."),
            Self::EmptyFactorBank => write!(f, "Question has no factors."),
            Self::NonFiniteValue { label } => {
                write!(f, "Factor '{label}' does not have a finite value.")
            },
            Self::ReversedRange { label, low, high } => write!(f,
                                                               "Factor '{label}' has a reversed range: {low} is greater than {high}."),
        }
    }
}

impl std::error::Error for QuestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for QuestionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
