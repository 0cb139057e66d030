//! Rule-based field scanners for supplier invoice text.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod patterns;
pub mod supplier;

pub use amounts::{format_idr, parse_idr, scan_amounts, select_amount};
pub use dates::{scan_dates, select_date};
pub use items::scan_items;
pub use supplier::match_supplier;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scored, unconfirmed guess for a field's value, derived from one
/// fragment. Scores are pure functions of the fragment sequence; nothing is
/// trusted until a person confirms it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score. Comparable within one field kind only.
    pub score: f32,
    /// Fragment text the value was read from.
    pub source: String,
    /// Fragment index in reading order.
    pub line: usize,
}

impl<T> Candidate<T> {
    pub fn new(value: T, score: f32, source: impl Into<String>, line: usize) -> Self {
        Self {
            value,
            score,
            source: source.into(),
            line,
        }
    }
}

/// Which supplier name form a match came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    ShortName,
    CompanyName,
}

/// A supplier resolved against the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierMatch {
    /// Registry id of the matched supplier.
    pub supplier_id: i64,
    /// The registry name that matched.
    pub matched_name: String,
    /// Whether the short or the company name matched.
    pub kind: NameKind,
}

/// An unconfirmed line item read from the items region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGuess {
    /// Product name guess, numbers and unit token stripped.
    pub name: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Canonical unit, when a unit keyword was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Price per unit in rupiah.
    pub unit_price: Decimal,
}
