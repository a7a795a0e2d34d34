//! Check a program read from a file or stdin, and report whether it is syntactically valid.
//!
//! ```ignore
//! <program.txt syntaxcheck
//! syntaxcheck --lenient program.txt
//! ```

use std::process::ExitCode;

use clap::Parser;
use syntaxcheck::cli::{init_logging, read_input, InputArgs, LexerArgs};
use syntaxcheck::check_with;

/// Syntax checker for assignments, PRINT statements, and expressions.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    lexer: LexerArgs,
}

fn main() -> std::io::Result<ExitCode> {
    init_logging();
    let args = Args::parse();

    let input = read_input(args.input.file.as_deref())?;
    match check_with(&args.lexer.lexer(), &input) {
        Ok(()) => {
            println!("Input program is correct.");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!("rejected: {:?}", e);
            println!("Input program is invalid: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
