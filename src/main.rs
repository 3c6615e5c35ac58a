//! # bf
//!
//! Command line front end for the interpreter.
//!

mod term;

fn main() {
    term::main()
}
