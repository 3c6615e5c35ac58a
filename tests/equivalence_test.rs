mod common;
use bf::lang::Instruction;
use bf::mach::{Event, Program};
use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BUDGET: usize = 200_000;

fn random_body(rng: &mut StdRng, depth: usize, out: &mut String) {
    let len = rng.gen_range(0..12);
    for _ in 0..len {
        match rng.gen_range(0..20) {
            0..=4 => out.push(if rng.gen() { '+' } else { '-' }),
            5..=9 => out.push(if rng.gen() { '>' } else { '<' }),
            10..=12 => {
                let run = rng.gen_range(1..300);
                let ch = if rng.gen() { '+' } else { '>' };
                out.extend(std::iter::repeat(ch).take(run));
            }
            13 => out.push('.'),
            14 => out.push(','),
            15 => out.push_str(if rng.gen() { "[>]" } else { "[<]" }),
            _ if depth < 3 => {
                out.push('[');
                random_body(rng, depth + 1, out);
                out.push(']');
            }
            _ => out.push('-'),
        }
    }
}

fn random_input(rng: &mut StdRng) -> Vec<u8> {
    let len = rng.gen_range(0..8);
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn test_optimizer_preserves_behavior() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut compared = 0;
    for _ in 0..400 {
        let mut source = String::new();
        random_body(&mut rng, 0, &mut source);
        let input = random_input(&mut rng);

        let raw = Program::compile(&source).unwrap();
        let plain = exec_n(raw.clone(), &input, BUDGET);
        if plain.result.as_ref().ok() != Some(&Event::Stopped) {
            continue;
        }
        let fast = exec_n(raw.optimize(), &input, BUDGET);
        assert_eq!(fast.result.unwrap(), Event::Stopped, "{}", source);
        assert_eq!(plain.output, fast.output, "{}", source);
        assert_eq!(plain.tape, fast.tape, "{}", source);
        compared += 1;
    }
    assert!(compared > 40);
}

#[test]
fn test_optimizer_never_grows_program() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let mut source = String::new();
        random_body(&mut rng, 0, &mut source);
        let raw = Program::compile(&source).unwrap();
        let fast = raw.optimize();
        assert!(fast.len() <= raw.len());
        let count = |p: &Program, op: Instruction| p.ops().iter().filter(|o| **o == op).count();
        assert_eq!(count(&raw, Instruction::Print), count(&fast, Instruction::Print));
        assert_eq!(count(&raw, Instruction::Read), count(&fast, Instruction::Read));
    }
}

#[test]
fn test_unbalanced_programs_fail_alike() {
    for source in &["]", "+]", "[", "+[-]]", ".[[", "+[>]]"] {
        let raw = Program::compile(source).unwrap();
        let plain = exec_n(raw.clone(), b"", BUDGET);
        let fast = exec_n(raw.optimize(), b"", BUDGET);
        assert_eq!(plain.output, fast.output, "{}", source);
        assert_eq!(
            plain.result.map_err(|e| e.code()),
            fast.result.map_err(|e| e.code()),
            "{}",
            source
        );
    }
}
