//! # bf
//!
//! An optimizing interpreter for the eight-instruction tape language.
//!
//! Install with `cargo install bf-lang`, then run a program with
//! `bf program.b`.
//!
//! The library is split the same way the interpreter works. [`lang`]
//! turns source text into instructions, and [`mach`] optimizes and
//! executes them.
//! ```
//! use bf::mach::{run, Options};
//!
//! let mut input: &[u8] = b"";
//! let mut output = vec![];
//! run("++++++++[>++++++++<-]>+.", &Options::default(), &mut input, &mut output).unwrap();
//! assert_eq!(output, b"A");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/reference.rs"]
#[allow(non_snake_case)]
pub mod __Reference;

pub mod lang;
pub mod mach;
