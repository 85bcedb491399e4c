use std::iter::Peekable;

use tracing::debug;

use crate::{
    error::ScriptError,
    model::{Operation, OperationKind},
    script::lexer::{Token, tokenize},
    session::Session,
};

/// Result type used while applying a tile script.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Applies a tile script to `session`, one append per tile.
///
/// The script is tokenized up front, so a lexing error leaves the session
/// untouched. Errors found while walking the tokens (unknown factor, missing
/// override value) stop the run; the appends made before that point stay in
/// the session.
///
/// Grammar:
/// ```text
///     script   := { tile }
///     tile     := factor | operator
///     factor   := "#" index [ "=" [ "-" | "−" ] number ]
///     operator := "+" | "-" | "−" | "*" | "×" | "/" | "÷"
/// ```
///
/// # Errors
/// Any [`ScriptError`].
pub fn run(session: &mut Session, source: &str) -> ScriptResult<()> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    while let Some((token, line)) = iter.next() {
        match token {
            Token::FactorRef(index) => apply_factor(session, *index, *line, &mut iter)?,
            Token::Operator(kind) => {
                let operation = bank_operation(session, *kind);
                session.add_operation(operation);
            },
            other => {
                return Err(ScriptError::UnexpectedToken { token: other.to_string(),
                                                          line:  *line, });
            },
        }
    }

    debug!(items = session.items().len(), state = %session.state(), "script applied");
    Ok(())
}

/// Places factor `index` (1-based) and applies an optional `= value`
/// override to the new placement.
fn apply_factor<'a, I>(session: &mut Session,
                       index: usize,
                       line: usize,
                       tokens: &mut Peekable<I>)
                       -> ScriptResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let available = session.factor_bank().len();
    let factor = index.checked_sub(1)
                      .and_then(|i| session.factor_bank().get(i))
                      .cloned()
                      .ok_or(ScriptError::UnknownFactor { index,
                                                          available,
                                                          line })?;
    let factor = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        factor.with_value(parse_override(tokens, line)?)
    } else {
        factor
    };

    session.add_factor(factor);
    Ok(())
}

/// Reads `[ "-" ] number` after an `=`.
fn parse_override<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ScriptResult<f64>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let negative = matches!(tokens.peek(), Some((Token::Operator(OperationKind::Subtract), _)));
    if negative {
        tokens.next();
    }

    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(if negative { -value } else { *value }),
        _ => Err(ScriptError::ExpectedNumber { line }),
    }
}

/// The session's bank entry for `kind`, falling back to the standard tile.
fn bank_operation(session: &Session, kind: OperationKind) -> Operation {
    session.operation_bank()
           .iter()
           .find(|op| op.kind == kind)
           .cloned()
           .unwrap_or_else(|| Operation::standard(kind))
}
