use std::env;
use std::fs;
use std::process;

use snafu::{ResultExt, Snafu};

use retcc::generate_assembly;

#[derive(Debug, Snafu)]
enum DriverError {
  #[snafu(display("could not read input file '{path}': {source}"))]
  ReadInput {
    path: String,
    source: std::io::Error,
  },

  #[snafu(display("could not write output file '{path}': {source}"))]
  WriteOutput {
    path: String,
    source: std::io::Error,
  },
}

fn run(input_path: &str, output_path: &str) -> Result<(), DriverError> {
  let source = fs::read_to_string(input_path).context(ReadInputSnafu { path: input_path })?;

  let output = generate_assembly(&source);
  for diagnostic in &output.diagnostics {
    eprintln!("{diagnostic}");
  }

  fs::write(output_path, output.assembly).context(WriteOutputSnafu { path: output_path })?;
  Ok(())
}

fn main() {
  let args: Vec<String> = env::args().collect();
  if args.len() != 3 {
    let program = args.first().map(String::as_str).unwrap_or("retcc");
    eprintln!("usage: {program} <input_file> <output_file>");
    process::exit(1);
  }

  match run(&args[1], &args[2]) {
    Ok(()) => println!("Compilation successful"),
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
