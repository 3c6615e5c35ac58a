use super::Error;
use crate::error;
use std::convert::TryFrom;

/// ## Instruction set
///
/// Every operator of the language is one instruction. Only the pointer
/// move and the value delta carry a payload, a signed byte, so runs of
/// the same operator can be folded into one instruction by the optimizer.
///
/// `Seek` never comes out of the parser. It is the optimizer's rewrite
/// of `[>]` and friends: move by the payload until the cell under the
/// pointer is zero.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Move(i8),
    Add(i8),
    Print,
    Read,
    BeginLoop,
    EndLoop,
    Seek(i8),
}

impl Instruction {
    pub fn parse(ch: char) -> Option<Instruction> {
        use Instruction::*;
        match ch {
            '>' => Some(Move(1)),
            '<' => Some(Move(-1)),
            '+' => Some(Add(1)),
            '-' => Some(Add(-1)),
            '.' => Some(Print),
            ',' => Some(Read),
            '[' => Some(BeginLoop),
            ']' => Some(EndLoop),
            _ => None,
        }
    }

    pub fn is_operator(ch: char) -> bool {
        matches!(ch, '>' | '<' | '+' | '-' | '.' | ',' | '[' | ']')
    }
}

impl TryFrom<char> for Instruction {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match Instruction::parse(ch) {
            Some(instruction) => Ok(instruction),
            None => Err(error!(InvalidToken; &format!("{:?}", ch))),
        }
    }
}

fn repeat(f: &mut std::fmt::Formatter, n: i8, up: char, down: char) -> std::fmt::Result {
    let ch = if n < 0 { down } else { up };
    for _ in 0..n.unsigned_abs() {
        write!(f, "{}", ch)?;
    }
    Ok(())
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Move(n) => repeat(f, *n, '>', '<'),
            Add(n) => repeat(f, *n, '+', '-'),
            Print => write!(f, "."),
            Read => write!(f, ","),
            BeginLoop => write!(f, "["),
            EndLoop => write!(f, "]"),
            Seek(n) => {
                write!(f, "[")?;
                repeat(f, *n, '>', '<')?;
                write!(f, "]")
            }
        }
    }
}
