// Shared types for the Reed toolchain: source positions, tokens, and
// lexical errors. Everything downstream of the lexer depends on this crate.

pub mod error;
pub mod pos;
pub mod token;
