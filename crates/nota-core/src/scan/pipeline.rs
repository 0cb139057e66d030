//! The invoice scanning pipeline: scan, score, select, assemble.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::config::ScanConfig;
use crate::models::supplier::Supplier;

use super::rules::{
    match_supplier, scan_amounts, scan_dates, scan_items, select_amount, select_date, Candidate,
    ItemGuess, SupplierMatch,
};
use super::TextFragment;

/// Everything the scanner could guess about one invoice photo, ready for
/// human correction. Absent fields are normal outcomes; the warnings list
/// names each one. Assembly never fails, whatever the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Best supplier match, if any registry entry cleared the threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Candidate<SupplierMatch>>,

    /// Best invoice date guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Candidate<NaiveDate>>,

    /// Best invoice total guess, in rupiah.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Candidate<Decimal>>,

    /// Line item guesses, in reading order. All passing candidates are kept.
    pub line_items: Vec<Candidate<ItemGuess>>,

    /// One entry per field that could not be found.
    pub warnings: Vec<String>,
}

impl ExtractionResult {
    /// Whether nothing at all was extracted (the full-manual-entry path).
    pub fn is_empty(&self) -> bool {
        self.supplier.is_none()
            && self.date.is_none()
            && self.total_amount.is_none()
            && self.line_items.is_empty()
    }
}

/// Scans OCR'd invoice text and assembles scored field guesses.
///
/// Stateless between documents: the registry is read-only input and nothing
/// from one scan carries into the next.
pub struct InvoiceScanner {
    config: ScanConfig,
}

impl InvoiceScanner {
    /// Create a scanner with default configuration.
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Create a scanner with the given configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline over a fragment sequence.
    ///
    /// Each field is scanned independently in a single pass; an empty
    /// sequence (the oracle-failure case) produces an all-absent result
    /// with all four warnings.
    pub fn scan(&self, fragments: &[TextFragment], registry: &[Supplier]) -> ExtractionResult {
        info!(
            fragments = fragments.len(),
            suppliers = registry.len(),
            "scanning invoice"
        );

        let supplier = match_supplier(fragments, registry, self.config.word_overlap_threshold);

        // Per-supplier weight overrides apply to the remaining fields.
        let weights = self
            .config
            .weights_for(supplier.as_ref().map(|c| c.value.supplier_id));

        let date = select_date(scan_dates(fragments, &self.config, &weights));
        let total_amount = select_amount(scan_amounts(fragments, &self.config, &weights));
        let line_items = scan_items(fragments, &self.config);

        let mut warnings = Vec::new();
        if supplier.is_none() {
            warnings.push("supplier not found".to_string());
        }
        if date.is_none() {
            warnings.push("date not found".to_string());
        }
        if total_amount.is_none() {
            warnings.push("total amount not found".to_string());
        }
        if line_items.is_empty() {
            warnings.push("line items not found".to_string());
        }

        debug!(warnings = warnings.len(), items = line_items.len(), "scan assembled");

        ExtractionResult {
            supplier,
            date,
            total_amount,
            line_items,
            warnings,
        }
    }

    /// Convenience: split raw OCR text into fragments and scan.
    pub fn scan_text(&self, text: &str, registry: &[Supplier]) -> ExtractionResult {
        let fragments = TextFragment::sequence_from_text(text);
        self.scan(&fragments, registry)
    }
}

impl Default for InvoiceScanner {
    fn default() -> Self {
        Self::new()
    }
}
