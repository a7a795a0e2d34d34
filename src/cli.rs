//! Pieces shared by the command-line tools.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::reader::{LexPolicy, Lexer, LexerConfig, MatchRule};

/// Lexer options accepted by every tool.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct LexerArgs {
    /// Skip characters that start no token, instead of rejecting the input
    #[arg(long)]
    pub lenient: bool,

    /// Take the first matching token pattern rather than the longest
    /// (`3.14` then reads as `3`, `.`, `14`)
    #[arg(long)]
    pub first_match: bool,

    /// Do not recognize `^` as an operator
    #[arg(long)]
    pub no_caret: bool,
}

impl LexerArgs {
    pub fn config(&self) -> LexerConfig {
        let mut config = LexerConfig::default();
        if self.lenient {
            config = config.with_policy(LexPolicy::Lenient);
        }
        if self.first_match {
            config = config.with_matching(MatchRule::FirstMatch);
        }
        if self.no_caret {
            config = config.without_caret();
        }
        config
    }

    pub fn lexer(&self) -> Lexer {
        Lexer::new(self.config())
    }
}

/// Install a stderr logger, filtered by `RUST_LOG` (default: warnings only).
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the whole program, from the file if given or from stdin otherwise.
pub fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => {
            tracing::debug!("reading {}", path.display());
            std::fs::read_to_string(path)
        }
        None => {
            let mut input = String::new();
            std::io::stdin().lock().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Optional input file, shared by the tools.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Program to read; standard input if absent
    pub file: Option<PathBuf>,
}
