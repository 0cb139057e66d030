//! CLI application for supplier invoice scanning.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{due, scan};

/// Supplier invoice scanner - extract bookkeeping fields from OCR text
#[derive(Parser)]
#[command(name = "nota")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an OCR text dump into field guesses
    Scan(scan::ScanArgs),

    /// Compute a payment due date from invoice date and terms
    Due(due::DueArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Scan(args) => scan::run(args),
        Commands::Due(args) => due::run(args),
    }
}
