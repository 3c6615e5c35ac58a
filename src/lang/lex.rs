use super::{Error, Instruction};
use crate::error;

/// Keep only the eight operator characters. Everything else in a
/// source file is commentary.
pub fn filter(s: &str) -> String {
    s.chars().filter(|c| Instruction::is_operator(*c)).collect()
}

/// Strict lexing. The first character that is not an operator is an
/// `InvalidToken` error with its column, counted in characters.
pub fn lex(s: &str) -> Result<Vec<Instruction>, Error> {
    let mut instructions = Vec::with_capacity(s.len());
    for (col, ch) in s.chars().enumerate() {
        match Instruction::parse(ch) {
            Some(instruction) => instructions.push(instruction),
            None => return Err(error!(InvalidToken, ..&(col..col + 1); &format!("{:?}", ch))),
        }
    }
    Ok(instructions)
}
