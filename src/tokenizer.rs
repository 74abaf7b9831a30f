//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer is intentionally tiny. It classifies identifier-shaped
//! lexemes against a closed two-keyword set, extracts decimal integer
//! literals and single-character punctuation, and skips everything else
//! with a diagnostic. Nothing the input contains can make it fail.

use crate::error::LexDiagnostic;

/// Keywords of the language. Adding an entry here is a grammar change.
const KEYWORDS: [&str; 2] = ["int", "return"];

/// Kinds of tokens recognised by the front-end.
///
/// `Operator` is part of the closed set but is never produced: the language
/// has no operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Identifier,
  Keyword,
  IntegerLiteral,
  Operator,
  Punctuation,
  Eof,
}

/// Thin wrapper for lexical information needed by later stages.
///
/// `loc`/`len` span the lexeme in the source (empty for `Eof`); `line` and
/// `column` are the 1-based position of the lexeme's first character.
/// `value` is set only for `IntegerLiteral`.
#[derive(Debug, Clone)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Option<i64>,
  pub loc: usize,
  pub len: usize,
  pub line: usize,
  pub column: usize,
}

impl Token {
  /// Convenience constructor to keep the `tokenize` loop readable.
  pub fn new(
    kind: TokenKind,
    loc: usize,
    len: usize,
    line: usize,
    column: usize,
    value: Option<i64>,
  ) -> Self {
    Self {
      kind,
      value,
      loc,
      len,
      line,
      column,
    }
  }
}

/// Everything one scan of the source produces: the token stream and any
/// non-fatal diagnostics raised along the way.
#[derive(Debug)]
pub struct Lexed {
  pub tokens: Vec<Token>,
  pub diagnostics: Vec<LexDiagnostic>,
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
///
/// Unrecognised characters and oversized literals are reported and skipped;
/// the scan always runs to the end of the input.
pub fn tokenize(input: &str) -> Lexed {
  let mut tokens = Vec::new();
  let mut diagnostics = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;
  let mut line = 1;
  let mut column = 1;

  while i < bytes.len() {
    let c = bytes[i];

    if c == b'\n' {
      i += 1;
      line += 1;
      column = 1;
      continue;
    }
    if c.is_ascii_whitespace() {
      i += 1;
      column += 1;
      continue;
    }

    if c.is_ascii_alphabetic() || c == b'_' {
      let start = i;
      let start_column = column;
      i += 1;
      while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
        i += 1;
      }
      let kind = if KEYWORDS.contains(&&input[start..i]) {
        TokenKind::Keyword
      } else {
        TokenKind::Identifier
      };
      tokens.push(Token::new(kind, start, i - start, line, start_column, None));
      column += i - start;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      let start_column = column;
      i += 1;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      let text = &input[start..i];
      match text.parse::<i64>() {
        Ok(value) => tokens.push(Token::new(
          TokenKind::IntegerLiteral,
          start,
          i - start,
          line,
          start_column,
          Some(value),
        )),
        Err(_) => diagnostics.push(LexDiagnostic::OversizedIntegerLiteral {
          text: text.to_string(),
          line,
          column: start_column,
        }),
      }
      column += i - start;
      continue;
    }

    if matches!(c, b'(' | b')' | b'{' | b'}' | b';') {
      tokens.push(Token::new(TokenKind::Punctuation, i, 1, line, column, None));
      i += 1;
      column += 1;
      continue;
    }

    let character = input[i..].chars().next().unwrap_or('\0');
    diagnostics.push(LexDiagnostic::UnexpectedCharacter {
      character,
      line,
      column,
    });
    i += character.len_utf8();
    column += 1;
  }

  tokens.push(Token::new(TokenKind::Eof, input.len(), 0, line, column, None));
  Lexed {
    tokens,
    diagnostics,
  }
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}
