//! rbpt - Tokenize and parse a Ruby subset from the command line.
//!
//! Two subcommands cover the two public operations: `tokenize` dumps the
//! token stream one line per token, `parse` runs the Pratt parser with the
//! pretty-printing visitor. Both read the named file, or all of standard
//! input when no path is given. Parse diagnostics drain to standard error
//! after the run; they never stop it.

mod error;
mod packer;
mod printer;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use error::{RbptError, Result};
use printer::Printer;

/// A tokenizer and expression parser for a Ruby subset.
#[derive(Parser, Debug)]
#[command(name = "rbpt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and parse a Ruby subset", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "RBPT_VERBOSE")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one line per token
    ///
    /// Each line has the shape `<start>-<end> <category> <text>` with byte
    /// offsets from the start of the input and Ripper-style categories.
    Tokenize {
        /// Source file (standard input when omitted)
        path: Option<PathBuf>,
    },

    /// Parse and print one line per recognized node
    ///
    /// Nodes print bottom-up: operands before the operator that joins
    /// them. Anything the parser had to guess about is reported on
    /// standard error once parsing finishes.
    Parse {
        /// Source file (standard input when omitted)
        path: Option<PathBuf>,
    },

    /// Parse and write the packed binary form to standard output
    ///
    /// Literals pack as 12-byte kind/start/end records, operators as
    /// 4-byte kind records, all little-endian.
    Pack {
        /// Source file (standard input when omitted)
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Tokenize { path } => run_tokenize(path.as_deref())?,
        Commands::Parse { path } => run_parse(path.as_deref())?,
        Commands::Pack { path } => run_pack(path.as_deref())?,
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| RbptError::Logging(e.to_string()))?;

    Ok(())
}

/// Read the whole source: a file when a path is given, standard input
/// otherwise.
fn read_source(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).map_err(|source| RbptError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut source = Vec::new();
            io::stdin().read_to_end(&mut source)?;
            Ok(source)
        }
    }
}

/// Execute the tokenize subcommand.
fn run_tokenize(path: Option<&Path>) -> anyhow::Result<()> {
    let source = read_source(path)?;
    tracing::debug!(bytes = source.len(), "tokenizing");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    rbp_lex::tokenize(&source, &mut out).context("failed to write token stream")?;
    out.flush()?;

    Ok(())
}

/// Execute the parse subcommand.
fn run_parse(path: Option<&Path>) -> anyhow::Result<()> {
    let source = read_source(path)?;
    tracing::debug!(bytes = source.len(), "parsing");

    let handler = rbp_util::Handler::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut printer = Printer::new(&source, &mut out);

    rbp_par::parse(&source, &mut printer, &handler);
    out.flush()?;

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", diagnostic.message);
    }

    Ok(())
}

/// Execute the pack subcommand.
fn run_pack(path: Option<&Path>) -> anyhow::Result<()> {
    let source = read_source(path)?;
    tracing::debug!(bytes = source.len(), "packing");

    let packed = packer::parse_and_pack(&source);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&packed).context("failed to write packed form")?;
    out.flush()?;

    Ok(())
}
