//! Print the tokens of a program, one per line, in their `Debug` form.
//!
//! ```ignore
//! <program.txt tokens_to_debug --first-match
//! ```

use clap::Parser;
use syntaxcheck::cli::{init_logging, read_input, InputArgs, LexerArgs};

/// Dump the token sequence the checker would see.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    lexer: LexerArgs,
}

fn main() -> std::io::Result<()> {
    init_logging();
    let args = Args::parse();

    let input = read_input(args.input.file.as_deref())?;
    let lexer = args.lexer.lexer();
    tracing::debug!("lexer config: {:?}", lexer.config());
    let tokens = lexer.tokenize(&input)?;
    for token in tokens {
        println!("{:?}", token);
    }
    Ok(())
}
