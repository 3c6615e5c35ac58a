use crate::lang::Error;
use crate::mach::{Event, Program, Runtime};


struct Outcome {
    runtime: Runtime,
    output: Vec<u8>,
    result: Result<Event, Error>,
}

fn run(source: &str, input: &[u8]) -> Outcome {
    run_cycles(Program::compile(source).unwrap(), input, 100_000)
}

fn run_optimized(source: &str, input: &[u8]) -> Outcome {
    run_cycles(Program::compile(source).unwrap().optimize(), input, 100_000)
}

fn run_cycles(program: Program, mut input: &[u8], cycles: usize) -> Outcome {
    let mut runtime = Runtime::new(program, 0);
    let mut output = vec![];
    let result = runtime.execute(cycles, &mut input, &mut output);
    Outcome {
        runtime,
        output,
        result,
    }
}
