//! Due command - compute a payment due date.

use chrono::NaiveDate;
use clap::Args;

use nota_core::{due_date, PaymentTerms};

/// Arguments for the due command.
#[derive(Args)]
pub struct DueArgs {
    /// Invoice date as DD/MM/YYYY
    #[arg(required = true)]
    date: String,

    /// Payment terms: cash, 2week, or monthly
    #[arg(short, long, default_value = "cash")]
    terms: String,
}

pub fn run(args: DueArgs) -> anyhow::Result<()> {
    let invoice_date = NaiveDate::parse_from_str(&args.date, "%d/%m/%Y")
        .map_err(|_| anyhow::anyhow!("invalid date (expected DD/MM/YYYY): {}", args.date))?;

    let terms = PaymentTerms::from_str(&args.terms)
        .ok_or_else(|| anyhow::anyhow!("invalid payment terms: {}", args.terms))?;

    let due = due_date(invoice_date, terms);
    println!("{}", due.format("%d/%m/%Y"));

    Ok(())
}
