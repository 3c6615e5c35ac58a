use crate::lang::Instruction;
use std::convert::TryFrom;
use tracing::debug;

/// ## Peephole optimizer
///
/// One left-to-right pass over the instructions:
///
/// * Runs of `Move` fold into one `Move`, runs of `Add` into one `Add`.
///   A run whose sum leaves the signed byte range continues in a new
///   instruction, so the total is exactly the sum of the run.
/// * `Print`, `Read` and `]` are copied and end any run.
/// * A loop whose body is a single pointer move, `[>]` or `[<<]`, becomes
///   one `Seek`. Every other loop is kept and its body goes through the
///   same rules. `[]` stays as it is.
///
/// Nothing is reordered, and nothing moves across I/O.
pub fn optimize(ops: &[Instruction]) -> Vec<Instruction> {
    use Instruction::*;
    let mut out: Vec<Instruction> = Vec::with_capacity(ops.len());
    let mut index = 0;
    while index < ops.len() {
        let op = ops[index];
        index += 1;
        match op {
            Move(n) => coalesce(&mut out, n, Move),
            Add(n) => coalesce(&mut out, n, Add),
            Print | Read | EndLoop | Seek(_) => out.push(op),
            BeginLoop => match seek_loop(&ops[index..]) {
                Some((delta, len)) => {
                    out.push(Seek(delta));
                    index += len;
                }
                None => out.push(BeginLoop),
            },
        }
    }
    debug!(before = ops.len(), after = out.len(), "optimized");
    out
}

fn coalesce(out: &mut Vec<Instruction>, n: i8, make: fn(i8) -> Instruction) {
    if let Some(last) = out.last_mut() {
        let sum = match (*last, make(0)) {
            (Instruction::Move(m), Instruction::Move(_)) => m.checked_add(n),
            (Instruction::Add(m), Instruction::Add(_)) => m.checked_add(n),
            _ => None,
        };
        if let Some(sum) = sum {
            *last = make(sum);
            return;
        }
    }
    out.push(make(n));
}

// Looks just past a `[` for a body of nothing but pointer moves closed
// by `]`. Gives the total move and how many instructions to consume.
fn seek_loop(body: &[Instruction]) -> Option<(i8, usize)> {
    let mut total: i32 = 0;
    for (index, op) in body.iter().enumerate() {
        match op {
            Instruction::Move(n) => total = total.saturating_add(*n as i32),
            Instruction::EndLoop if index > 0 && total != 0 => {
                return i8::try_from(total).ok().map(|delta| (delta, index + 1));
            }
            _ => return None,
        }
    }
    None
}
