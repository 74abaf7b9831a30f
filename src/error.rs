//! Shared diagnostic types used across the compilation pipeline.
//!
//! Lexical problems are deliberately non-fatal: the tokenizer reports them
//! and keeps scanning, so a diagnostic here never stops a run. Fatal errors
//! only exist at the driver boundary and live next to `main`.

use snafu::Snafu;

/// Non-fatal problem found while scanning source text.
///
/// Each diagnostic names the offending lexeme and its 1-based position.
/// The token stream simply omits whatever triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum LexDiagnostic {
  #[snafu(display("unexpected character '{character}' at line {line}, column {column}"))]
  UnexpectedCharacter {
    character: char,
    line: usize,
    column: usize,
  },

  #[snafu(display("integer literal '{text}' is out of range at line {line}, column {column}"))]
  OversizedIntegerLiteral {
    text: String,
    line: usize,
    column: usize,
  },
}
