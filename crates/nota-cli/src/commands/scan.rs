//! Scan command - extract field guesses from one OCR text dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use nota_core::{
    format_idr, ExtractionResult, InvoiceScanner, ScanConfig, Supplier,
};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input OCR text file
    #[arg(required = true)]
    input: PathBuf,

    /// Supplier registry JSON file
    #[arg(short, long)]
    suppliers: Option<PathBuf>,

    /// Scanner configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ScanArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let config = match &args.config {
        Some(path) => ScanConfig::from_file(path)?,
        None => ScanConfig::default(),
    };

    let registry = match &args.suppliers {
        Some(path) => Supplier::load_registry(path)?,
        None => Vec::new(),
    };

    let text = fs::read_to_string(&args.input)?;
    info!("scanning {} ({} bytes)", args.input.display(), text.len());

    let scanner = InvoiceScanner::with_config(config);
    let result = scanner.scan_text(&text, &registry);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text => format_text(&result, &registry),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(result: &ExtractionResult, registry: &[Supplier]) -> String {
    let mut out = String::new();

    match &result.supplier {
        Some(found) => {
            let name = registry
                .iter()
                .find(|s| s.id == found.value.supplier_id)
                .map(|s| s.short_name.as_str())
                .unwrap_or(found.value.matched_name.as_str());
            out.push_str(&format!(
                "Supplier: {} (match {:.0}%)\n",
                name,
                found.score * 100.0
            ));
        }
        None => out.push_str("Supplier: -\n"),
    }

    match &result.date {
        Some(found) => out.push_str(&format!("Date:     {}\n", found.value.format("%d/%m/%Y"))),
        None => out.push_str("Date:     -\n"),
    }

    match &result.total_amount {
        Some(found) => out.push_str(&format!("Total:    {}\n", format_idr(found.value))),
        None => out.push_str("Total:    -\n"),
    }

    if result.line_items.is_empty() {
        out.push_str("Items:    -\n");
    } else {
        out.push_str("Items:\n");
        for item in &result.line_items {
            let guess = &item.value;
            out.push_str(&format!(
                "  {} x{} {} @ {}\n",
                guess.name,
                guess.quantity,
                guess.unit.as_deref().unwrap_or("-"),
                format_idr(guess.unit_price)
            ));
        }
    }

    if !result.warnings.is_empty() {
        out.push('\n');
        for warning in &result.warnings {
            out.push_str(&format!("{} {}\n", style("!").yellow(), warning));
        }
    }

    out
}
