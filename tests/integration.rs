use retcc::generate_assembly;

#[test]
fn return_0() {
  let output = generate_assembly("int main() { return 0; }");
  assert!(output.diagnostics.is_empty());
  assert!(output.assembly.contains(".global main"));
  assert!(output.assembly.contains("main:"));
  assert!(output.assembly.contains("movl $0, %eax"));
  assert!(output.assembly.contains("ret"));
}

#[test]
fn return_255() {
  let output = generate_assembly("int main() { return 255; }");
  assert!(output.assembly.contains("movl $255, %eax"));
}

#[test]
fn full_asm_format() {
  let output = generate_assembly("int main() { return 7; }");
  assert_eq!(
    output.assembly,
    ".global main\nmain:\n    movl $7, %eax\n    ret\n"
  );
}

#[test]
fn multiline_source() {
  let output = generate_assembly("int main() {\n    return 123;\n}\n");
  assert!(output.assembly.contains("movl $123, %eax"));
}

#[test]
fn unexpected_character_is_nonfatal() {
  let output = generate_assembly("int main() { return 4#2; }");
  assert_eq!(output.diagnostics.len(), 1);
  assert!(
    output.diagnostics[0]
      .to_string()
      .contains("unexpected character '#'")
  );
  // The '#' splits the literal into two, the second of which breaks the
  // declaration pattern, so the function is dropped.
  assert_eq!(output.assembly, ".global main\nmain:\n");
}

#[test]
fn missing_close_brace_degrades_to_header_only() {
  let output = generate_assembly("int main() { return 0;");
  assert!(output.diagnostics.is_empty());
  assert_eq!(output.assembly, ".global main\nmain:\n");
}

#[test]
fn empty_input_degrades_to_header_only() {
  let output = generate_assembly("");
  assert!(output.diagnostics.is_empty());
  assert_eq!(output.assembly, ".global main\nmain:\n");
}

#[test]
fn unrecognised_declarations_degrade_to_header_only() {
  let output = generate_assembly("int main { return 1; }");
  assert_eq!(output.assembly, ".global main\nmain:\n");
}

#[test]
fn second_function_emits_first() {
  let output = generate_assembly("int f() { return 1; } int g() { return 2; }");
  assert_eq!(
    output.assembly,
    ".global main\nmain:\n    movl $2, %eax\n    ret\n    movl $1, %eax\n    ret\n"
  );
}

#[test]
fn compiling_twice_is_byte_identical() {
  let source = "int main() { return 42; }";
  assert_eq!(
    generate_assembly(source).assembly,
    generate_assembly(source).assembly
  );
}
