use super::{optimize, Address};
use crate::lang::{lex, Error, Instruction};
use std::sync::Arc;

/// ## Compiled program
///
/// The instructions are shared and never change once built. Next to
/// them sits a jump table giving, for every `[`, the address of its
/// matching `]`. It is filled the same way a forward scan counting
/// nesting depth would find the match, so a `[` without one is `None`.

#[derive(Debug, Clone)]
pub struct Program {
    ops: Arc<[Instruction]>,
    jumps: Arc<[Option<Address>]>,
}

impl Program {
    pub fn new(ops: Vec<Instruction>) -> Program {
        let jumps = link(&ops);
        Program {
            ops: ops.into(),
            jumps: jumps.into(),
        }
    }

    /// Lex and link source already filtered down to operators.
    pub fn compile(s: &str) -> Result<Program, Error> {
        Ok(Program::new(lex(s)?))
    }

    pub fn optimize(&self) -> Program {
        Program::new(optimize(&self.ops))
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    pub fn op(&self, addr: Address) -> Option<Instruction> {
        self.ops.get(addr).copied()
    }

    /// Address of the `]` closing the `[` at `addr`.
    pub fn matching(&self, addr: Address) -> Option<Address> {
        self.jumps.get(addr).copied().flatten()
    }
}

fn link(ops: &[Instruction]) -> Vec<Option<Address>> {
    let mut jumps = vec![None; ops.len()];
    let mut open: Vec<Address> = vec![];
    for (addr, op) in ops.iter().enumerate() {
        match op {
            Instruction::BeginLoop => open.push(addr),
            Instruction::EndLoop => {
                if let Some(begin) = open.pop() {
                    jumps[begin] = Some(addr);
                }
            }
            _ => {}
        }
    }
    jumps
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for op in self.ops.iter() {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
