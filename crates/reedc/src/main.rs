//! The Reed toolchain CLI.
//!
//! Provides the `reedc` command with the following subcommand:
//!
//! - `reedc lex <file>` - Tokenize a Reed source file and print the tokens
//!
//! Options:
//! - `--json` - Output tokens as JSON (one object per line)

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use reed_common::token::TokenKind;

#[derive(Parser)]
#[command(name = "reedc", version, about = "The Reed toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a Reed source file and print the tokens
    Lex {
        /// Path to the source file
        file: PathBuf,

        /// Output tokens as JSON (one object per line) instead of the
        /// human-readable format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { file, json } => {
            if let Err(e) = lex(&file, json) {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }
}

/// Read, scan and print one token per line.
fn lex(file: &Path, json: bool) -> Result<(), String> {
    let source = std::fs::read_to_string(file)
        .map_err(|e| format!("failed to read '{}': {e}", file.display()))?;

    let stream = reed_lexer::scan(&source).map_err(|e| format!("{e} ({})", e.pos))?;

    for token in stream.tokens() {
        if json {
            let line = serde_json::json!({
                "type": format!("{:?}", token.kind),
                "value": token.text,
            });
            println!("{line}");
        } else {
            // Re-quote decoded string content so it reads as a literal.
            let value = if token.is(TokenKind::Str) {
                format!("\"{}\"", token.text)
            } else {
                token.text.clone()
            };
            println!("[type: {:?}, value: {value}]", token.kind);
        }
    }

    Ok(())
}
