use super::{Address, Options, Program, Stack, Tape};
use crate::error;
use crate::lang::{Error, Instruction};
use std::io::{ErrorKind, Read, Write};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Run a program to the end on a fresh tape of at least `tape_capacity`
/// cells. Output written before a failure is not taken back.
pub fn execute<R: Read, W: Write>(
    program: Program,
    tape_capacity: usize,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    Runtime::new(program, tape_capacity).run(input, output)
}

/// Lex, optionally optimize, then execute `source`. The source must
/// already be filtered; any other character is an `InvalidToken`.
pub fn run<R: Read, W: Write>(
    source: &str,
    options: &Options,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let mut program = Program::compile(source)?;
    if options.optimize {
        program = program.optimize();
    }
    execute(program, options.tape_capacity, input, output)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
    /// The program counter walked off the end of the program.
    Stopped,
}

/// ## Virtual machine
///
/// Executes one program against one tape. Work is handed out in slices
/// of cycles so a caller can stop a program that never ends.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    tape: Tape,
    stack: Stack<Address>,
    pc: Address,
    cycles: u64,
}

impl Runtime {
    pub fn new(program: Program, tape_capacity: usize) -> Runtime {
        let tape = Tape::new(tape_capacity);
        debug!(ops = program.len(), tape = tape.len(), "runtime loaded");
        Runtime {
            program,
            tape,
            stack: Stack::new(),
            pc: 0,
            cycles: 0,
        }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    /// Instructions executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_stopped(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Execute until the program ends.
    pub fn run<R: Read, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            if let Event::Stopped = self.execute(usize::max_value(), input, output)? {
                return Ok(());
            }
        }
    }

    /// Execute at most `cycles` instructions.
    pub fn execute<R: Read, W: Write>(
        &mut self,
        cycles: usize,
        input: &mut R,
        output: &mut W,
    ) -> Result<Event> {
        for _ in 0..cycles {
            let op = match self.program.op(self.pc) {
                Some(op) => op,
                None => return Ok(self.stopped()),
            };
            if let Err(error) = self.step(op, input, output) {
                debug!(pc = self.pc, %error, "program failed");
                return Err(error);
            }
            self.cycles += 1;
        }
        if self.is_stopped() {
            return Ok(self.stopped());
        }
        trace!(pc = self.pc, cycles = self.cycles, "slice exhausted");
        Ok(Event::Running)
    }

    fn stopped(&self) -> Event {
        debug!(cycles = self.cycles, "program stopped");
        Event::Stopped
    }

    fn step<R: Read, W: Write>(
        &mut self,
        op: Instruction,
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        use Instruction::*;
        match op {
            Move(n) => self.tape.shift(n),
            Add(n) => self.tape.add(n),
            Print => output.write_all(&[self.tape.get()])?,
            Read => {
                output.flush()?;
                if let Some(byte) = read_byte(input)? {
                    self.tape.set(byte);
                }
            }
            BeginLoop => {
                if self.tape.get() == 0 {
                    match self.program.matching(self.pc) {
                        Some(end) => self.pc = end,
                        None => return Err(error!(UnmatchedLoop, self.pc; "NO MATCHING ]")),
                    }
                } else {
                    self.stack.push(self.pc);
                }
            }
            EndLoop => match self.stack.pop() {
                Ok(begin) => {
                    self.pc = begin;
                    return Ok(());
                }
                Err(error) => return Err(error.at_address(self.pc)),
            },
            Seek(n) => {
                // A full lap of the tape per cycle; if no zero turned up
                // the same instruction runs again next cycle.
                let limit = self.tape.len();
                if !self.tape.seek(n, limit) {
                    return Ok(());
                }
            }
        }
        self.pc += 1;
        Ok(())
    }
}

fn read_byte<R: Read>(input: &mut R) -> std::io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match input.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
