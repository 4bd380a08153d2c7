use clap::Parser;
use loxscan::{ConsoleReporter, ErrorReporter, Scanner};
use std::{
    error::Error,
    fs,
    io::{self, Write},
    process,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EXIT_LEX_ERROR: i32 = 65;

#[derive(Parser, Debug)]
#[command(version, about = "Print the tokens of a Lox script")]
struct Args {
    /// Script to tokenize; starts a prompt when omitted
    filename: Option<String>,

    /// Log every token and diagnostic to stderr
    #[arg(short, long, env = "LOXSCAN_DEBUG")]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.debug);

    match args.filename {
        Some(filename) => run_script(&filename),
        None => repl(),
    }?;

    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run_script(filename: &str) -> Result<(), Box<dyn Error>> {
    let source = String::from_utf8(fs::read(filename)?)?;
    let mut reporter = ConsoleReporter::new();

    tokenize(&source, &mut reporter)?;

    if reporter.had_error() {
        process::exit(EXIT_LEX_ERROR);
    }

    Ok(())
}

fn repl() -> Result<(), Box<dyn Error>> {
    let mut reporter = ConsoleReporter::new();
    loop {
        let mut buf = String::new();
        io::stdout().write_all(b"> ")?;
        io::stdout().flush()?;
        if io::stdin().read_line(&mut buf)? == 0 {
            return Ok(());
        }

        tokenize(&buf, &mut reporter)?;
        reporter.reset();
    }
}

fn tokenize(source: &str, reporter: &mut ConsoleReporter) -> io::Result<()> {
    let tokens = Scanner::new(source, reporter).scan_tokens();

    let mut out = io::stdout().lock();
    for token in tokens {
        writeln!(out, "{}", token)?;
    }

    Ok(())
}
