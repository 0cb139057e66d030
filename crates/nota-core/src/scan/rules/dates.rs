//! Invoice date scanning.
//!
//! Dates on supplier invoices are DD/MM/YYYY (occasionally DD/MM/YY).
//! Fragments that also carry account or phone labels are skipped whole,
//! since account numbers OCR into the same digit groups.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::config::{ScanConfig, ScoreWeights};
use crate::scan::TextFragment;

use super::patterns::{contains_any, DATE_DMY, DATE_DMY_SHORT, DATE_LABEL_KEYWORDS, DATE_SKIP_KEYWORDS};
use super::Candidate;

/// Scan the fragment sequence for plausible invoice dates.
///
/// A parsed date whose year falls outside the configured range is dropped
/// silently; that is a plausibility filter, not an error.
pub fn scan_dates(
    fragments: &[TextFragment],
    config: &ScanConfig,
    weights: &ScoreWeights,
) -> Vec<Candidate<NaiveDate>> {
    let mut candidates = Vec::new();

    for fragment in fragments {
        let upper = fragment.text.to_uppercase();
        if contains_any(&upper, DATE_SKIP_KEYWORDS) {
            continue;
        }

        let mut score = 0.0;
        if contains_any(&upper, DATE_LABEL_KEYWORDS) {
            score += weights.date_keyword;
        }
        if fragment.position <= weights.top_fraction {
            score += weights.top_position;
        }

        for caps in DATE_DMY.captures_iter(&fragment.text) {
            if let Some(date) = parse_dmy(&caps[1], &caps[2], &caps[3], config.year_range) {
                candidates.push(Candidate::new(date, score, &fragment.text, fragment.line));
            }
        }

        // Two-digit years only matter when no full date matched the fragment.
        if !DATE_DMY.is_match(&fragment.text) {
            for caps in DATE_DMY_SHORT.captures_iter(&fragment.text) {
                if let Some(date) = parse_dmy(&caps[1], &caps[2], &caps[3], config.year_range) {
                    candidates.push(Candidate::new(date, score, &fragment.text, fragment.line));
                }
            }
        }
    }

    debug!("found {} date candidates", candidates.len());
    candidates
}

/// Pick the top-scoring date; ties keep the earliest in reading order.
pub fn select_date(candidates: Vec<Candidate<NaiveDate>>) -> Option<Candidate<NaiveDate>> {
    let mut best: Option<Candidate<NaiveDate>> = None;
    for candidate in candidates {
        match &best {
            Some(b) if candidate.score <= b.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}

fn parse_dmy(day: &str, month: &str, year: &str, year_range: (i32, i32)) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let mut year: i32 = year.parse().ok()?;
    if year < 100 {
        year += 2000;
    }

    if year < year_range.0 || year > year_range.1 {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
