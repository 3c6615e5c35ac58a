extern crate ansi_term;
extern crate ctrlc;
use ansi_term::Style;
use bf::error;
use bf::lang::{filter, Error, ErrorCode};
use bf::mach::{Event, Options, Program, Runtime, MIN_TAPE_LEN};
use clap::Parser;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

const EXIT_UNKNOWN: i32 = -0x01;
const EXIT_BAD_ARGUMENTS: i32 = -0x10;
const EXIT_INVALID_PROGRAM: i32 = -0x11;
const EXIT_INTERRUPTED: i32 = 130;

const CYCLES_PER_SLICE: usize = 5000;

#[derive(Parser, Debug)]
#[command(name = "bf", version)]
#[command(about = "Run a program written in the eight-instruction tape language")]
struct Args {
    /// Source file. The source is read from standard input when this
    /// is missing or `-`.
    file: Option<PathBuf>,

    /// Program source given directly instead of a file
    #[arg(short = 'e', long = "execute", conflicts_with = "file")]
    execute: Option<String>,

    /// Number of tape cells. Never less than the default.
    #[arg(short = 't', long = "tape-size", default_value_t = MIN_TAPE_LEN)]
    tape_size: usize,

    /// Run the program exactly as written
    #[arg(long)]
    no_optimize: bool,

    /// Reject characters that are not operators instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the instructions that would run, then exit
    #[arg(long)]
    dump: bool,
}

impl Args {
    fn source_on_stdin(&self) -> bool {
        self.execute.is_none()
            && self
                .file
                .as_ref()
                .map_or(true, |file| file.as_os_str() == "-")
    }

    fn options(&self) -> Options {
        Options {
            tape_capacity: self.tape_size,
            optimize: !self.no_optimize,
        }
    }
}

/// Ctrl-C state shared with the handler thread.
#[derive(Debug, Default)]
struct Interrupt {
    requested: AtomicBool,
    waiting: AtomicBool,
}

impl Interrupt {
    /// Record one Ctrl-C. True means the main thread cannot answer it
    /// between slices: the program is blocked on input, or an earlier
    /// Ctrl-C is still pending.
    fn signal(&self) -> bool {
        let pending = self.requested.swap(true, Ordering::SeqCst);
        pending || self.waiting.load(Ordering::SeqCst)
    }

    fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Program input that tells the Ctrl-C handler when a read may block.
struct Watched<'a, R> {
    inner: R,
    interrupt: &'a Interrupt,
}

impl<R: Read> Read for Watched<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.interrupt.waiting.store(true, Ordering::SeqCst);
        let result = self.inner.read(buf);
        self.interrupt.waiting.store(false, Ordering::SeqCst);
        result
    }
}

pub fn main() {
    init_logging();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            std::process::exit(parse_error_code(&error));
        }
    };
    let interrupt = Arc::new(Interrupt::default());
    let int_moved = interrupt.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        if int_moved.signal() {
            eprintln!("{}", Style::new().bold().paint("?INTERRUPTED"));
            std::process::exit(EXIT_INTERRUPTED);
        }
    }) {
        warn!(%error, "Ctrl-C handler not installed");
    }
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let code = match main_loop(&args, &interrupt, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
            exit_code(&error)
        }
    };
    std::process::exit(code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_error_code(error: &clap::Error) -> i32 {
    // --help and --version also arrive as errors
    if error.use_stderr() {
        EXIT_BAD_ARGUMENTS
    } else {
        0
    }
}

fn exit_code(error: &Error) -> i32 {
    match error.code() {
        ErrorCode::InvalidToken | ErrorCode::UnmatchedLoop => EXIT_INVALID_PROGRAM,
        ErrorCode::Io => EXIT_UNKNOWN,
    }
}

fn read_source<R: Read>(args: &Args, stdin: &mut R) -> Result<String, Error> {
    if let Some(source) = &args.execute {
        return Ok(source.clone());
    }
    if args.source_on_stdin() {
        let mut bytes = vec![];
        stdin.read_to_end(&mut bytes)?;
        return Ok(String::from_utf8_lossy(&bytes).into_owned());
    }
    let path = args.file.clone().unwrap_or_default();
    match fs::read(&path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => Err(error!(Io; &format!("{}: {}", path.display(), e))),
    }
}

fn compile(args: &Args, source: &str) -> Result<Program, Error> {
    let program = if args.strict {
        Program::compile(source)?
    } else {
        Program::compile(&filter(source))?
    };
    if args.options().optimize {
        Ok(program.optimize())
    } else {
        Ok(program)
    }
}

fn main_loop<R: Read, W: Write>(
    args: &Args,
    interrupt: &Interrupt,
    stdin: &mut R,
    output: &mut W,
) -> Result<i32, Error> {
    let source = read_source(args, stdin)?;
    let program = compile(args, &source)?;
    if args.dump {
        writeln!(output, "{}", program)?;
        output.flush()?;
        return Ok(0);
    }

    let mut empty = std::io::empty();
    let inner: &mut dyn Read = if args.source_on_stdin() {
        &mut empty
    } else {
        stdin
    };
    let mut input = Watched { inner, interrupt };
    let mut runtime = Runtime::new(program, args.options().tape_capacity);
    loop {
        let result = runtime.execute(CYCLES_PER_SLICE, &mut input, output);
        if result.is_err() {
            output.flush()?;
        }
        let event = result?;
        if interrupt.is_requested() {
            output.flush()?;
            debug!(pc = runtime.pc(), cycles = runtime.cycles(), "interrupted");
            eprintln!("{}", Style::new().bold().paint("?INTERRUPTED"));
            return Ok(EXIT_INTERRUPTED);
        }
        if let Event::Stopped = event {
            break;
        }
    }
    output.flush()?;
    Ok(0)
}
