/// The tile script lexer.
///
/// Tile scripts reference factors by their 1-based bank position (`#2`),
/// operations by symbol (`+`, `−`, `×`, `÷` or their ASCII spellings) and
/// may override a placed factor's value with `= <number>`.
pub mod lexer;
/// Applies a tokenized tile script to a session.
///
/// Each factor reference and operator becomes one append on the session, in
/// source order, so the session validates exactly as it would under direct
/// interaction.
pub mod runner;
