use bf::lang::Error;
use bf::mach::{Event, Program, Runtime, Tape};

pub struct Finished {
    pub output: Vec<u8>,
    pub tape: Tape,
    pub result: Result<Event, Error>,
}

pub fn exec(source: &str, input: &[u8]) -> Finished {
    exec_n(Program::compile(source).unwrap(), input, 1_000_000)
}

pub fn exec_optimized(source: &str, input: &[u8]) -> Finished {
    exec_n(Program::compile(source).unwrap().optimize(), input, 1_000_000)
}

pub fn exec_n(program: Program, mut input: &[u8], cycles: usize) -> Finished {
    let mut runtime = Runtime::new(program, 0);
    let mut output = vec![];
    let result = runtime.execute(cycles, &mut input, &mut output);
    Finished {
        output,
        tape: runtime.tape().clone(),
        result,
    }
}
