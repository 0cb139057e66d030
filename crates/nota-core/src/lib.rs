//! Core library for supplier invoice scanning and bookkeeping.
//!
//! This crate provides:
//! - OCR text field extraction (supplier, date, total, line items) with
//!   layered heuristic scoring, for human review and correction
//! - Supplier registry and invoice draft models matching the bookkeeping
//!   schema
//! - Payment-terms due-date rules and rupiah formatting
//!
//! Image OCR, persistence, and the correction UI are the embedding
//! application's concern; the scanner consumes text fragments and produces
//! one [`ExtractionResult`] per document.

pub mod error;
pub mod models;
pub mod scan;
pub mod terms;

pub use error::{NotaError, Result};
pub use models::config::{ScanConfig, ScoreWeights, ScoreWeightsPatch};
pub use models::invoice::{InvoiceDraft, ItemDraft, PaymentMethod, PaymentStatus};
pub use models::supplier::{PaymentTerms, PpnHandling, Supplier};
pub use scan::{
    Candidate, ExtractionResult, InvoiceScanner, ItemGuess, NameKind, SupplierMatch, TextFragment,
};
pub use scan::rules::{format_idr, parse_idr};
pub use terms::{due_date, last_day_of_month};
