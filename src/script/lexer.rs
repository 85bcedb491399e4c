use logos::Logos;

use crate::{error::ScriptError, model::OperationKind};

/// Represents a lexical token of a tile script.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// A reference to a factor in the bank, such as `#3`. Holds the 1-based
    /// index as written.
    #[regex(r"#[0-9]+", parse_factor_ref)]
    FactorRef(usize),
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// An operation tile, written with its bank symbol or ASCII spelling.
    #[regex(r"[+\-−*×/÷]", |lex| OperationKind::from_symbol(lex.slice()))]
    Operator(OperationKind),
    /// `=`
    #[token("=")]
    Equals,
    /// `// Comments.`
    #[token("//", skip_comment)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FactorRef(index) => write!(f, "#{index}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(kind) => write!(f, "{kind}"),
            Self::Equals => write!(f, "="),
            Self::Comment => write!(f, "//"),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits a tile script into tokens paired with their line numbers.
///
/// Line breaks are dropped from the output; they only advance the line
/// counter.
///
/// # Errors
/// [`ScriptError::UnexpectedToken`] for text that is not part of the tile
/// script vocabulary.
///
/// # Example
/// ```
/// use tilecalc::{
///     model::OperationKind,
///     script::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("#1 × #2 = 4 // four per box").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::FactorRef(1), 1),
///                 (Token::Operator(OperationKind::Multiply), 1),
///                 (Token::FactorRef(2), 1),
///                 (Token::Equals, 1),
///                 (Token::Number(4.0), 1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ScriptError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::NewLine) => {},
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                return Err(ScriptError::UnexpectedToken { token: lexer.slice().to_string(),
                                                          line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}

/// Parses the index of a `#N` factor reference.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(usize)`: The index as written after `#`.
/// - `None`: If the digits do not fit a `usize`.
fn parse_factor_ref(lex: &logos::Lexer<Token>) -> Option<usize> {
    lex.slice()[1..].parse().ok()
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Skips a `//` comment up to, but not including, the end of the line.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer positioned after `//`.
///
/// # Returns
/// `logos::Skip`, so the comment produces no token.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let rest = lex.remainder();
    let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
    lex.bump(len);
    logos::Skip
}
