#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading a tile script.
pub enum ScriptError {
    /// Found text that is not a tile, an operator, or a value override.
    UnexpectedToken {
        /// The offending text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A factor reference points outside the question's factor bank.
    UnknownFactor {
        /// The 1-based index that was requested.
        index:     usize,
        /// Number of factors the question offers.
        available: usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// `=` was not followed by a number.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnknownFactor { index,
                                  available,
                                  line, } => write!(f,
                                                    "Error on line {line}: Factor #{index} does not exist. The question has {available} factors."),
            Self::ExpectedNumber { line } => {
                write!(f, "Error on line {line}: Expected a number after '='.")
            },
        }
    }
}

impl std::error::Error for ScriptError {}
