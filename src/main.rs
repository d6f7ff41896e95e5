mod ls8;

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ls8::exec::{run, run_traced};
use ls8::program::{load_bytes, read_program};
use ls8::{Cpu, LoadError, Ram};

const EXIT_USAGE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;
const EXIT_FAULT: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "ls8", version)]
#[command(about = "Run an LS-8 program")]
struct Args {
    /// Program source: one binary byte per line, `#` starts a comment
    program: PathBuf,

    /// Print a trace line to stderr before every instruction
    #[arg(long)]
    trace: bool,
}

/// `RUST_LOG` overrides the default of `warn`. Logs go to stderr so they
/// never mix with program output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

/// `None` when clap should print and exit on its own (help, version).
fn usage_exit_code(e: &clap::Error) -> Option<i32> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(EXIT_USAGE),
    }
}

fn load_exit_code(e: &LoadError) -> i32 {
    match e {
        LoadError::NotFound { .. } => EXIT_NOT_FOUND,
        _ => EXIT_FAULT,
    }
}

/// One-line fatal diagnostic, independent of the log filter.
fn report(w: &mut impl Write, e: &dyn Display) {
    let _ = writeln!(w, "{e}");
}

fn fail(e: &dyn Display, code: i32) -> ! {
    report(&mut io::stderr().lock(), e);
    process::exit(code);
}

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => match usage_exit_code(&e) {
            None => e.exit(),
            Some(code) => {
                let _ = e.print();
                process::exit(code);
            }
        },
    };

    let code = read_program(&args.program).unwrap_or_else(|e| fail(&e, load_exit_code(&e)));

    let mut mem = Ram::new();
    let mut cpu = Cpu::default();
    if let Err(e) = load_bytes(&mut mem, 0, &code) {
        fail(&e, load_exit_code(&e));
    }

    let mut out = io::stdout().lock();
    let res = if args.trace {
        run_traced(&mut cpu, &mut mem, &mut out, &mut io::stderr().lock())
    } else {
        run(&mut cpu, &mut mem, &mut out)
    };
    if let Err(e) = res {
        fail(&e, EXIT_FAULT);
    }
}
