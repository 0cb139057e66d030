//! Regex patterns and keyword tables for invoice field scanning.
//!
//! The keyword lists are flat data: scoring and exclusion behavior is tuned
//! here, not in the scanners. All containment checks run against uppercased
//! fragment text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns: DD/MM/YYYY and DD/MM/YY, slash or dash separated.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b"
    ).unwrap();

    pub static ref DATE_DMY_SHORT: Regex = Regex::new(
        r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2})\b"
    ).unwrap();

    // Numeric token with optional thousand/decimal separators, e.g.
    // "4.000.000", "1,500,000", "2,5".
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"[\d.,]+"
    ).unwrap();

    // Numbers inside item lines: "2", "2,5", "500000".
    pub static ref ITEM_NUMBER: Regex = Regex::new(
        r"\d+[.,]?\d*"
    ).unwrap();
}

/// Lines carrying the invoice total.
pub const TOTAL_KEYWORDS: &[&str] = &[
    "TOTAL AMOUNT",
    "GRAND TOTAL",
    "TOTAL:",
    "JUMLAH",
    "AMOUNT DUE",
];

/// Lines whose numbers are account/phone digits, never amounts.
pub const AMOUNT_SKIP_KEYWORDS: &[&str] = &[
    "ACCOUNT", "REKENING", "BANK", "NO.", "NO:", "HP", "PHONE", "TELP", "FAX",
];

/// Lines whose DD/MM-looking digits are not dates.
pub const DATE_SKIP_KEYWORDS: &[&str] = &[
    "ACCOUNT", "REKENING", "NO:", "NO.", "HP", "PHONE", "TELP",
];

/// Labels that mark an actual invoice date.
pub const DATE_LABEL_KEYWORDS: &[&str] = &["DATE", "TANGGAL", "TGL"];

/// Table headers that open the line-item region.
pub const ITEM_HEADER_KEYWORDS: &[&str] = &[
    "DESCRIPTION", "ITEM", "PRODUCT", "QTY", "QUANTITY",
];

/// Lines that close the line-item region.
pub const ITEM_STOP_KEYWORDS: &[&str] = &[
    "TOTAL", "SUBTOTAL", "SUB TOTAL", "JUMLAH", "THANK YOU", "BANK",
];

/// Column labels that disqualify a stripped line as a product name.
pub const ITEM_NAME_JUNK: &[&str] = &["NO", "QTY", "PRICE", "TOTAL", "DISC"];

/// Unit keyword (uppercase token) to canonical unit.
pub const UNIT_KEYWORDS: &[(&str, &str)] = &[
    ("KG", "kg"),
    ("KILO", "kg"),
    ("KILOGRAM", "kg"),
    ("GRAM", "g"),
    ("GR", "g"),
    ("LITER", "liter"),
    ("LTR", "liter"),
    ("ML", "ml"),
    ("PCS", "pcs"),
    ("PC", "pcs"),
    ("PIECE", "pcs"),
    ("PACK", "pack"),
    ("PAK", "pack"),
    ("BOX", "box"),
    ("KOTAK", "box"),
    ("BOTTLE", "bottle"),
    ("BTL", "bottle"),
    ("CAN", "can"),
    ("KALENG", "can"),
];

/// Whether the uppercased text contains any of the keywords as a substring.
pub fn contains_any(upper: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| upper.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_pattern_full_year() {
        let caps = DATE_DMY.captures("Delivered 19/12/2025 by courier").unwrap();
        assert_eq!(&caps[1], "19");
        assert_eq!(&caps[2], "12");
        assert_eq!(&caps[3], "2025");
    }

    #[test]
    fn test_short_year_does_not_split_full_year() {
        // 19/12/2025 must not be read as 19/12/20
        assert!(DATE_DMY_SHORT.captures("19/12/2025").is_none());
        assert!(DATE_DMY_SHORT.captures("19-12-25").is_some());
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("ACCOUNT NO 12345678", AMOUNT_SKIP_KEYWORDS));
        assert!(contains_any("TOTAL AMOUNT 4000000", TOTAL_KEYWORDS));
        assert!(!contains_any("MANGO SMOOTHIE 2 PCS", AMOUNT_SKIP_KEYWORDS));
    }
}
