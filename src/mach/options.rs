use super::MIN_TAPE_LEN;

/// Settings for one run of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Requested tape length. Anything below `MIN_TAPE_LEN` is raised to it.
    pub tape_capacity: usize,
    /// Rewrite the program with the peephole optimizer before running it.
    pub optimize: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            tape_capacity: MIN_TAPE_LEN,
            optimize: true,
        }
    }
}
