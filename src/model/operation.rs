use std::fmt;

use serde::{Deserialize, Serialize};

/// The four arithmetic operations a tile can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// `+`
    Add,
    /// `−`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
}

impl OperationKind {
    /// All kinds in bank order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Computes `lhs <op> rhs` with plain floating-point arithmetic.
    ///
    /// Division by zero is not intercepted; it produces an infinite or NaN
    /// result exactly as IEEE 754 defines it.
    ///
    /// # Example
    /// ```
    /// use tilecalc::model::OperationKind;
    ///
    /// assert_eq!(OperationKind::Subtract.apply(10.0, 4.0), 6.0);
    /// assert_eq!(OperationKind::Divide.apply(10.0, 4.0), 2.5);
    /// assert!(OperationKind::Divide.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    /// The display label used by the standard bank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// The display symbol used by the standard bank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Resolves a symbol to its kind. Both the bank symbols and their ASCII
    /// spellings (`+ - * /`) are accepted.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An operator tile.
///
/// Operations are stateless; the same definition may be placed into a
/// sequence any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Display label, such as `"Multiply"`.
    pub label:  String,
    /// Display symbol, such as `"×"`.
    pub symbol: String,
    /// What the tile computes.
    #[serde(rename = "operation")]
    pub kind:   OperationKind,
}

impl Operation {
    /// The standard tile for `kind`.
    #[must_use]
    pub fn standard(kind: OperationKind) -> Self {
        Self { label: kind.label().to_string(),
               symbol: kind.symbol().to_string(),
               kind }
    }

    /// The fixed bank of four operations, in display order.
    #[must_use]
    pub fn bank() -> Vec<Self> {
        OperationKind::ALL.into_iter().map(Self::standard).collect()
    }
}
