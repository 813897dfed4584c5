/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of NanoBASIC.

*/

/// A NanoBASIC line number. Zero is not a valid line number.
pub type LineNumber = u32;

/// Character range of a token within its source line.
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod lex;
mod parse;
mod program;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use parse::parse;
pub use program::Program;
