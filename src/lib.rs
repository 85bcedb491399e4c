//! # tilecalc
//!
//! tilecalc is the logic core of a tile-based arithmetic exercise. A learner
//! assembles an expression from factor tiles (quantities) and operation tiles,
//! the sequence is validated structurally after every edit, and a valid
//! sequence is folded strictly left to right, without operator precedence.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{question::Question, session::Session};

/// Provides the error types of every stage.
///
/// Structural defects, evaluation precondition failures, session mutation
/// errors, question payload errors, and tile script errors each have their
/// own enum with a human readable `Display` implementation.
///
/// # Responsibilities
/// - Defines one error enum per failure family.
/// - Attaches positions or line numbers where they help the user.
/// - Integrates with `std::error::Error` so errors can be boxed and chained.
pub mod error;
/// Defines the tiles and the items a sequence is made of.
///
/// # Responsibilities
/// - Declares `Factor`, `Operation` and `OperationKind`.
/// - Declares the tagged `SequenceItem` and the `ItemId` minted per placement.
/// - Provides the standard four-operation bank.
pub mod model;
/// Loads and prepares the question that supplies the factor bank.
pub mod question;
/// Drives a session from text.
///
/// The tile script is a small textual stand-in for dragging tiles: it names
/// factors by bank position and operations by symbol.
pub mod script;
/// Validates and evaluates sequences.
///
/// # Responsibilities
/// - Classifies a sequence as empty, valid, or invalid.
/// - Explains why an invalid sequence was rejected.
/// - Folds a valid sequence into a number, left to right.
pub mod sequence;
/// Owns the state of one learner session.
///
/// The session holds the sequence and its validation state and exposes the
/// mutations that are allowed to change them.
pub mod session;

/// Runs a tile script against `question` and returns the submitted result.
///
/// A fresh session is created for the question, the script is applied to it,
/// and the resulting sequence is submitted. When `auto_print` is set the
/// result is printed to standard output.
///
/// # Errors
/// Returns an error if the script cannot be read or the assembled sequence is
/// not a valid expression.
///
/// # Examples
/// ```
/// use tilecalc::{get_result, model::Factor, question::Question};
///
/// let question = Question::new("Seconds in a day?",
///                              vec![Factor::new("Hours", "h", 24.0),
///                                   Factor::new("Seconds per hour", "s", 3600.0)]);
///
/// assert_eq!(get_result(&question, "#1 × #2", false).unwrap(), 86_400.0);
///
/// // Ends on an operation: not a valid expression.
/// assert!(get_result(&question, "#1 ×", false).is_err());
/// ```
pub fn get_result(question: &Question,
                  source: &str,
                  auto_print: bool)
                  -> Result<f64, Box<dyn std::error::Error>> {
    let mut session = Session::new(question.clone());

    script::runner::run(&mut session, source)?;

    if let Some(message) = session.state().message() {
        tracing::debug!(reason = message, "sequence rejected");
    }

    let result = session.submit()?;

    if auto_print {
        println!("{result}");
    }

    Ok(result)
}
