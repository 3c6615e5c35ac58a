use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Loop resolution stack
///
/// Holds the address of every `[` whose body is currently running.
/// Popping an empty stack is the `]` without a `[` case.

pub struct Stack<T> {
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Stack<T> {
        Stack { vec: vec![] }
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack::default()
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val)
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(UnmatchedLoop; "NO OPEN LOOP")),
        }
    }
}
