//! SMTX command line harness
//!
//! Loads matrix documents, runs one operation, and writes or prints the
//! rendered result. All format behavior lives in smtx-core; this binary
//! only sequences file access around it.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use smtx::{file_io, ops, par, FileError, SmtxError, SparseMatrix};

/// Signature shared by the serial and parallel operation entry points
type OpFn = fn(&SparseMatrix, &SparseMatrix) -> smtx::Result<SparseMatrix>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SMTX CLI - Load, combine, and inspect text sparse matrix documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two matrices of identical dimensions
    Add {
        /// Left operand document
        a: PathBuf,

        /// Right operand document
        b: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Subtract the second matrix from the first
    Subtract {
        /// Left operand document
        a: PathBuf,

        /// Right operand document
        b: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Multiply two matrices with a matching inner dimension
    Multiply {
        /// Left operand document
        a: PathBuf,

        /// Right operand document
        b: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spread rows of the left operand across threads
        #[arg(long)]
        parallel: bool,
    },
    /// Print a document in canonical rendering
    Show {
        /// Document to print
        file: PathBuf,
    },
    /// Show dimensions and sparsity of a document
    Info {
        /// Document to inspect
        file: PathBuf,
    },
    /// Convert a document to JSON
    #[cfg(feature = "serde")]
    Export {
        /// Document to convert
        file: PathBuf,

        /// Write the JSON here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a JSON document back to canonical text
    #[cfg(feature = "serde")]
    Import {
        /// JSON document to convert
        file: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { a, b, output } => {
            handle_combine(&a, &b, ops::add, output.as_deref())
        }
        Commands::Subtract { a, b, output } => {
            handle_combine(&a, &b, ops::subtract, output.as_deref())
        }
        Commands::Multiply {
            a,
            b,
            output,
            parallel,
        } => {
            let op: OpFn = if parallel { par::multiply } else { ops::multiply };
            handle_combine(&a, &b, op, output.as_deref())
        }
        Commands::Show { file } => handle_show(&file),
        Commands::Info { file } => handle_info(&file),
        #[cfg(feature = "serde")]
        Commands::Export { file, output } => handle_export(&file, output.as_deref()),
        #[cfg(feature = "serde")]
        Commands::Import { file, output } => handle_import(&file, output.as_deref()),
    }
}

fn handle_combine(
    a_path: &Path,
    b_path: &Path,
    op: OpFn,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let a = load_operand(a_path)?;
    let b = load_operand(b_path)?;

    let result = op(&a, &b).map_err(FileError::Format)?;
    write_result(&result, output)
}

fn handle_show(path: &Path) -> Result<(), Box<dyn Error>> {
    let matrix = load_operand(path)?;
    print!("{matrix}");

    Ok(())
}

fn handle_info(path: &Path) -> Result<(), Box<dyn Error>> {
    let matrix = load_operand(path)?;
    let (nrows, ncols) = matrix.dimensions();
    let nnz = matrix.nnz();

    println!("Matrix Information:");
    println!("   Dimensions: {nrows} x {ncols}");
    println!("   Non-zeros: {nnz}");
    if nrows > 0 && ncols > 0 {
        println!("   Sparsity: {:.6}%", sparsity_percent(nnz, nrows, ncols));
    }

    Ok(())
}

/// Share of stored entries in percent
///
/// The dimension product is taken in floating point; a large declared
/// dimension pair can exceed `usize::MAX`.
fn sparsity_percent(nnz: usize, nrows: usize, ncols: usize) -> f64 {
    (nnz as f64 / (nrows as f64 * ncols as f64)) * 100.0
}

#[cfg(feature = "serde")]
fn handle_export(path: &Path, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let matrix = load_operand(path)?;
    let json = smtx::to_json(&matrix)?;

    match output {
        Some(target) => {
            std::fs::write(target, json)?;
            println!("Result saved to {}", target.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(feature = "serde")]
fn handle_import(path: &Path, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| annotate(path, FileError::Io(err)))?;
    let matrix = smtx::from_json(&text).map_err(|err| annotate(path, err))?;

    write_result(&matrix, output)
}

fn write_result(matrix: &SparseMatrix, output: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(target) => {
            file_io::save_matrix(target, matrix)?;
            println!("Result saved to {}", target.display());
        }
        None => print!("{matrix}"),
    }

    Ok(())
}

fn load_operand(path: &Path) -> Result<SparseMatrix, Box<dyn Error>> {
    file_io::load_matrix(path).map_err(|err| annotate(path, err))
}

/// Prefix an error with the file it came from, quoting the offending
/// line of a parse failure
fn annotate(path: &Path, err: FileError) -> Box<dyn Error> {
    if let FileError::Format(SmtxError::Parse { line, .. }) = &err {
        if let Some(content) = read_line(path, *line) {
            return format!("{}: {err}: {content:?}", path.display()).into();
        }
    }

    format!("{}: {err}", path.display()).into()
}

/// Fetch one 1-based line of a file, if it exists
fn read_line(path: &Path, line: usize) -> Option<String> {
    let text = std::fs::read_to_string(path).ok()?;

    text.lines().nth(line.checked_sub(1)?).map(str::to_owned)
}
