//! Invoice total scanning and rupiah formatting.
//!
//! Numeric tokens are normalized by stripping thousand separators; invoice
//! photos mix "4.000.000", "4,000,000", and bare "4000000". Account and
//! phone lines are skipped whole, and values outside the plausible-total
//! bounds are dropped before scoring.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::config::{ScanConfig, ScoreWeights};
use crate::scan::TextFragment;

use super::patterns::{contains_any, AMOUNT_SKIP_KEYWORDS, NUMBER_TOKEN, TOTAL_KEYWORDS};
use super::Candidate;

/// Scan the fragment sequence for plausible invoice totals.
pub fn scan_amounts(
    fragments: &[TextFragment],
    config: &ScanConfig,
    weights: &ScoreWeights,
) -> Vec<Candidate<Decimal>> {
    let (min_amount, max_amount) = config.amount_bounds;
    let mut candidates = Vec::new();

    for fragment in fragments {
        let upper = fragment.text.to_uppercase();
        if contains_any(&upper, AMOUNT_SKIP_KEYWORDS) {
            continue;
        }

        let has_total_keyword = contains_any(&upper, TOTAL_KEYWORDS);
        let in_bottom = fragment.position >= weights.bottom_fraction;

        for token in NUMBER_TOKEN.find_iter(&fragment.text) {
            let Some(value) = normalize_token(token.as_str()) else {
                continue;
            };

            if value < min_amount || value > max_amount {
                continue;
            }

            let mut score = 0.0;
            if has_total_keyword {
                score += weights.total_keyword;
            }
            if in_bottom {
                score += weights.bottom_position;
            }
            if value >= weights.large_amount_floor {
                score += weights.magnitude;
            }

            candidates.push(Candidate::new(
                Decimal::from(value),
                score,
                &fragment.text,
                fragment.line,
            ));
        }
    }

    debug!("found {} amount candidates", candidates.len());
    candidates
}

/// Pick the top-scoring amount. Ties prefer the larger value, then the one
/// appearing later in reading order.
pub fn select_amount(candidates: Vec<Candidate<Decimal>>) -> Option<Candidate<Decimal>> {
    let mut best: Option<Candidate<Decimal>> = None;

    for candidate in candidates {
        let replace = match &best {
            None => true,
            Some(b) => {
                candidate.score > b.score
                    || (candidate.score == b.score
                        && (candidate.value > b.value
                            || (candidate.value == b.value && candidate.line > b.line)))
            }
        };
        if replace {
            best = Some(candidate);
        }
    }

    best
}

/// Strip separators from a numeric token and read it as whole rupiah.
fn normalize_token(token: &str) -> Option<i64> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parse a rupiah amount string ("Rp 1.500.000", "1,500,000") into a Decimal.
pub fn parse_idr(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    // A trailing two-digit group after the last separator is treated as
    // decimals only when it is preceded by a comma; rupiah amounts printed
    // with dots use them as thousand separators.
    if let Some(pos) = cleaned.rfind(',') {
        let tail = &cleaned[pos + 1..];
        if tail.len() <= 2 && !tail.is_empty() && cleaned[..pos].matches(',').count() == 0 {
            let integer: String = cleaned[..pos].chars().filter(|c| c.is_ascii_digit()).collect();
            return format!("{integer}.{tail}").parse().ok();
        }
    }

    let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Format an amount as rupiah: "Rp 4,000,000".
pub fn format_idr(amount: Decimal) -> String {
    let rounded = amount.round();
    let s = rounded.abs().to_string();

    let chars: Vec<char> = s.chars().collect();
    let mut formatted = String::new();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("Rp {sign}{formatted}")
}
