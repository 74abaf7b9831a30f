//! Code generation: lower the recognised program into AT&T x86 assembly.
//!
//! The emitter is a pure function of the tree. Every function with a body
//! becomes a load of the return value into `%eax` followed by `ret`;
//! bodyless functions contribute nothing. The immediate is emitted exactly
//! as parsed, with no range check against the register width.

use crate::parser::{Expr, Function, Program, Stmt};

/// Emit assembly for the whole program: a fixed header declaring `main`,
/// then each declaration in sequence order.
pub fn generate(program: &Program) -> String {
  let mut asm = String::new();
  asm.push_str(".global main\n");
  asm.push_str("main:\n");

  for function in &program.declarations {
    emit_function(function, &mut asm);
  }

  asm
}

fn emit_function(function: &Function, asm: &mut String) {
  let Some(Stmt::Return { value }) = &function.body else {
    return;
  };
  let Expr::Num { value } = value;
  asm.push_str(&format!("    movl ${value}, %eax\n"));
  asm.push_str("    ret\n");
}
