/*!
## Rust Machine Module

This Rust module is the optimizer and virtual machine for the language.

*/

pub use crate::lang::Address;

mod optimize;
mod options;
mod program;
mod runtime;
mod stack;
mod tape;

pub use optimize::optimize;
pub use options::Options;
pub use program::Program;
pub use runtime::execute;
pub use runtime::run;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use tape::Tape;
pub use tape::MIN_TAPE_LEN;

#[cfg(test)]
mod tests;
