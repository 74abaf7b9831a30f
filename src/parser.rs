//! Declaration recognition: a single forward scan over the token stream.
//!
//! The grammar has exactly one declaration shape, so there is no recursive
//! descent here. The scan anchors on each `int` keyword it meets and
//! greedily consumes the expected sequence; any mismatch abandons the
//! candidate without a diagnostic and the scan resumes from wherever the
//! cursor stopped. Malformed input therefore degrades to an empty program
//! instead of a hard error. The parser cannot fail.

use crate::tokenizer::{Token, TokenKind, token_text};

/// Root of the syntax tree.
///
/// Declarations are linked front-first: the most recently recognised
/// function sits at index zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
  pub declarations: Vec<Function>,
}

/// A recognised function declaration. `body` is absent when the braces
/// matched but no `return INTEGER` did.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
  pub name: String,
  pub body: Option<Stmt>,
}

/// Statement forms. Only `return` exists today.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
  Return { value: Expr },
}

/// Expression forms. Only integer literals exist today.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Num { value: i64 },
}

impl Expr {
  pub fn number(value: i64) -> Self {
    Self::Num { value }
  }
}

impl Stmt {
  pub fn ret(value: Expr) -> Self {
    Self::Return { value }
  }
}

/// Scan the token stream for function declarations.
///
/// Whatever does not match the supported shape is dropped silently; the
/// result is a valid (possibly empty) program either way.
pub fn parse(tokens: Vec<Token>, source: &str) -> Program {
  let mut stream = TokenStream::new(tokens, source);
  let mut program = Program {
    declarations: Vec::new(),
  };

  while !stream.is_eof() {
    scan_function(&mut stream, &mut program);
    // One unconditional step per outer iteration; on a full match this is
    // what moves the cursor past the closing brace.
    stream.advance();
  }

  program
}

/// Attempt to recognise one function declaration at the cursor.
///
/// Each matched token advances the cursor, so an abandoned candidate leaves
/// the cursor wherever the mismatch was found. The closing brace is checked
/// but not consumed; the caller's advance steps over it.
fn scan_function(stream: &mut TokenStream, program: &mut Program) {
  if !stream.equal_keyword("int") {
    return;
  }
  let Some(name) = stream.get_identifier() else {
    return;
  };
  if !(stream.equal_punct("(") && stream.equal_punct(")") && stream.equal_punct("{")) {
    return;
  }

  let mut body = None;
  if stream.equal_keyword("return")
    && let Some(value) = stream.get_integer()
  {
    body = Some(Stmt::ret(Expr::number(value)));
    stream.equal_punct(";");
  }

  if stream.at_punct("}") {
    program.declarations.insert(0, Function { name, body });
  }
}

/// Lightweight cursor over the token vector.
struct TokenStream<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenStream<'a> {
  /// Take ownership of the token stream; the scan advances `pos` as it
  /// consumes input.
  fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn peek(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  fn advance(&mut self) {
    self.pos += 1;
  }

  /// Consume the current token if it is the given keyword.
  fn equal_keyword(&mut self, keyword: &str) -> bool {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Keyword
      && token_text(token, self.source) == keyword
    {
      self.pos += 1;
      return true;
    }
    false
  }

  /// Consume the current token if it is the given punctuation.
  fn equal_punct(&mut self, punct: &str) -> bool {
    if let Some(token) = self.peek()
      && token.kind == TokenKind::Punctuation
      && token_text(token, self.source) == punct
    {
      self.pos += 1;
      return true;
    }
    false
  }

  /// Check the current token against the given punctuation without
  /// consuming it.
  fn at_punct(&self, punct: &str) -> bool {
    matches!(
      self.peek(),
      Some(token)
        if token.kind == TokenKind::Punctuation && token_text(token, self.source) == punct
    )
  }

  /// Consume the current token if it is an identifier, returning its text.
  fn get_identifier(&mut self) -> Option<String> {
    let token = self.peek()?;
    if token.kind != TokenKind::Identifier {
      return None;
    }
    let name = token_text(token, self.source).to_string();
    self.pos += 1;
    Some(name)
  }

  /// Consume the current token if it is an integer literal, returning its
  /// value.
  fn get_integer(&mut self) -> Option<i64> {
    let token = self.peek()?;
    if token.kind != TokenKind::IntegerLiteral {
      return None;
    }
    let value = token.value?;
    self.pos += 1;
    Some(value)
  }

  fn is_eof(&self) -> bool {
    match self.peek() {
      Some(token) => token.kind == TokenKind::Eof,
      None => true,
    }
  }
}
