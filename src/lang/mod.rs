/*!
# Rust Language Module

This Rust module provides the instruction model and lexical analysis
of the language.

*/

pub type Address = usize;
pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod instruction;
mod lex;

pub use error::Error;
pub use error::ErrorCode;
pub use instruction::Instruction;
pub use lex::filter;
pub use lex::lex;
