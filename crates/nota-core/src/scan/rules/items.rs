//! Line-item scanning.
//!
//! Items live between a table header (DESCRIPTION / QTY / PRODUCT) and the
//! totals block. Hand-written receipts often have no header at all, so when
//! none exists the region starts at the top of the document. A fragment in
//! the region becomes an item candidate only when it carries at least two
//! numbers: a quantity and a price.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::config::ScanConfig;
use crate::scan::TextFragment;

use super::patterns::{
    contains_any, ITEM_HEADER_KEYWORDS, ITEM_NAME_JUNK, ITEM_NUMBER, ITEM_STOP_KEYWORDS,
    UNIT_KEYWORDS,
};
use super::{Candidate, ItemGuess};

/// Base score for an item candidate; items are kept as a sequence, never
/// reduced to a single winner, so scores only convey "passed the filters".
const ITEM_SCORE: f32 = 0.8;

/// Maximum length of a product name guess.
const MAX_NAME_LEN: usize = 50;

/// Scan the fragment sequence for line-item candidates, in reading order.
pub fn scan_items(fragments: &[TextFragment], config: &ScanConfig) -> Vec<Candidate<ItemGuess>> {
    let has_header = fragments
        .iter()
        .any(|f| contains_any(&f.text.to_uppercase(), ITEM_HEADER_KEYWORDS));

    let mut in_region = !has_header;
    let mut items = Vec::new();

    for fragment in fragments {
        let upper = fragment.text.to_uppercase();

        if contains_any(&upper, ITEM_HEADER_KEYWORDS) {
            in_region = true;
            continue;
        }
        if contains_any(&upper, ITEM_STOP_KEYWORDS) {
            in_region = false;
            continue;
        }
        if !in_region {
            continue;
        }

        if let Some(guess) = parse_item(&fragment.text, &upper, config) {
            items.push(Candidate::new(guess, ITEM_SCORE, &fragment.text, fragment.line));
        }
    }

    debug!("found {} line item candidates", items.len());
    items
}

fn parse_item(text: &str, upper: &str, config: &ScanConfig) -> Option<ItemGuess> {
    let numbers: Vec<&str> = ITEM_NUMBER.find_iter(text).map(|m| m.as_str()).collect();
    if numbers.len() < 2 {
        return None;
    }

    // First number reads as the quantity; the price is the second when a
    // line total follows it, otherwise the last.
    let quantity = parse_quantity(numbers[0])?;
    let qty = quantity.to_f64()?;
    if qty < config.quantity_bounds.0 || qty > config.quantity_bounds.1 {
        return None;
    }

    let price_token = if numbers.len() >= 3 { numbers[1] } else { numbers[numbers.len() - 1] };
    let unit_price = parse_price(price_token)?;
    let price = unit_price.to_i64()?;
    if price < config.price_bounds.0 || price > config.price_bounds.1 {
        return None;
    }

    let unit = detect_unit(upper);
    let name = name_guess(text, &numbers, unit)?;

    Some(ItemGuess {
        name,
        quantity,
        unit: unit.map(|u| u.to_string()),
        unit_price,
    })
}

/// Quantity token: decimal comma allowed ("2,5" means two and a half).
fn parse_quantity(token: &str) -> Option<Decimal> {
    token.replace(',', ".").parse().ok()
}

/// Price token: separators are thousands ("500.000" is five hundred thousand).
fn parse_price(token: &str) -> Option<Decimal> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// First unit keyword present as a whole token in the fragment.
fn detect_unit(upper: &str) -> Option<&'static str> {
    let tokens: Vec<&str> = upper
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    UNIT_KEYWORDS
        .iter()
        .find(|(keyword, _)| tokens.iter().any(|t| t == keyword))
        .map(|(_, unit)| *unit)
}

/// Strip numbers, separators, and the unit token; what remains is the
/// product name guess.
fn name_guess(text: &str, numbers: &[&str], unit: Option<&str>) -> Option<String> {
    let mut name = text.to_string();
    for number in numbers {
        name = name.replacen(number, " ", 1);
    }

    let words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == ',' || c == '.' || c == '|')
        .filter(|w| w.chars().any(|c| c.is_ascii_alphanumeric()))
        .filter(|w| {
            let w_upper = w.to_uppercase();
            !UNIT_KEYWORDS.iter().any(|(keyword, canon)| {
                unit == Some(*canon) && w_upper == *keyword
            })
        })
        .collect();

    let name = words.join(" ");
    if name.len() < 3 {
        return None;
    }

    let name_upper = name.to_uppercase();
    let junk = name_upper
        .split_whitespace()
        .any(|w| ITEM_NAME_JUNK.contains(&w));
    if junk {
        return None;
    }

    Some(name.chars().take(MAX_NAME_LEN).collect())
}
