//! Supplier registry matching.
//!
//! Invoices rarely print a supplier's name exactly as registered, so
//! matching is word-overlap based: the fraction of a registry name's words
//! found in a fragment is the candidate's score, with exact containment
//! counting as a full match. An empty registry (or one with no match) yields
//! no candidate, which is a defined outcome, not an error.

use tracing::debug;

use crate::models::supplier::Supplier;
use crate::scan::TextFragment;

use super::{Candidate, NameKind, SupplierMatch};

/// Resolve the best-matching supplier for the document, or `None`.
pub fn match_supplier(
    fragments: &[TextFragment],
    registry: &[Supplier],
    threshold: f32,
) -> Option<Candidate<SupplierMatch>> {
    let mut best: Option<Candidate<SupplierMatch>> = None;

    for supplier in registry.iter().filter(|s| s.is_active) {
        let names = [
            (NameKind::CompanyName, supplier.company_name.as_str()),
            (NameKind::ShortName, supplier.short_name.as_str()),
        ];

        for (kind, name) in names {
            if name.trim().is_empty() {
                continue;
            }

            for fragment in fragments {
                let fraction = overlap_fraction(&fragment.text, name);
                if fraction < threshold {
                    continue;
                }

                let candidate = Candidate::new(
                    SupplierMatch {
                        supplier_id: supplier.id,
                        matched_name: name.to_string(),
                        kind,
                    },
                    fraction,
                    &fragment.text,
                    fragment.line,
                );

                if beats(&candidate, best.as_ref()) {
                    best = Some(candidate);
                }
            }
        }
    }

    if let Some(found) = &best {
        debug!(
            supplier_id = found.value.supplier_id,
            score = found.score,
            "matched supplier"
        );
    }

    best
}

/// Fraction of the registry name's whitespace-delimited words present in the
/// fragment. Exact containment of the whole name scores 1.0 regardless of
/// word boundaries.
pub fn overlap_fraction(fragment: &str, name: &str) -> f32 {
    let fragment_upper = fragment.to_uppercase();
    let name_upper = name.to_uppercase();

    if fragment_upper.contains(&name_upper) {
        return 1.0;
    }

    let name_words: Vec<&str> = name_upper.split_whitespace().collect();
    if name_words.is_empty() {
        return 0.0;
    }

    let fragment_words: Vec<&str> = fragment_upper.split_whitespace().collect();
    let matches = name_words
        .iter()
        .filter(|w| fragment_words.contains(w))
        .count();

    matches as f32 / name_words.len() as f32
}

/// Higher fraction wins; ties prefer the earlier fragment, then the company
/// name over the short name.
fn beats(candidate: &Candidate<SupplierMatch>, best: Option<&Candidate<SupplierMatch>>) -> bool {
    let Some(best) = best else {
        return true;
    };

    if candidate.score != best.score {
        return candidate.score > best.score;
    }
    if candidate.line != best.line {
        return candidate.line < best.line;
    }
    candidate.value.kind == NameKind::CompanyName && best.value.kind == NameKind::ShortName
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::supplier::{PaymentTerms, PpnHandling};
    use pretty_assertions::assert_eq;

    fn supplier(id: i64, company: &str, short: &str) -> Supplier {
        Supplier {
            id,
            company_name: company.to_string(),
            short_name: short.to_string(),
            category: None,
            payment_terms: PaymentTerms::Cash,
            ppn_handling: PpnHandling::Included,
            is_active: true,
        }
    }

    fn fragments(lines: &[&str]) -> Vec<TextFragment> {
        let count = lines.len();
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| TextFragment::new(*l, i, i as f32 / count as f32))
            .collect()
    }

    #[test]
    fn test_exact_short_name_match() {
        let registry = vec![supplier(7, "PT Segar Jaya Abadi", "Thirst Trap")];
        let found = match_supplier(
            &fragments(&["Thirst Trap", "19/12/2025"]),
            &registry,
            0.6,
        )
        .unwrap();

        assert_eq!(found.value.supplier_id, 7);
        assert_eq!(found.score, 1.0);
        assert_eq!(found.line, 0);
    }

    #[test]
    fn test_case_insensitive() {
        let registry = vec![supplier(7, "PT Segar Jaya Abadi", "Thirst Trap")];
        let found = match_supplier(&fragments(&["THIRST TRAP INVOICE"]), &registry, 0.6).unwrap();
        assert_eq!(found.value.supplier_id, 7);
    }

    #[test]
    fn test_fuzzy_word_overlap() {
        // Two of three company words present: 0.667 clears the 0.6 threshold.
        let registry = vec![supplier(3, "Tani Makmur Sejahtera", "Veggie Guy")];
        let found = match_supplier(
            &fragments(&["CV TANI MAKMUR - nota penjualan"]),
            &registry,
            0.6,
        )
        .unwrap();

        assert_eq!(found.value.supplier_id, 3);
        assert!(found.score >= 0.6 && found.score < 1.0);
    }

    #[test]
    fn test_below_threshold_absent() {
        let registry = vec![supplier(3, "Tani Makmur Sejahtera", "Veggie Guy")];
        assert!(match_supplier(&fragments(&["MAKMUR store"]), &registry, 0.6).is_none());
    }

    #[test]
    fn test_empty_registry_absent() {
        assert!(match_supplier(&fragments(&["Thirst Trap"]), &[], 0.6).is_none());
    }

    #[test]
    fn test_inactive_supplier_skipped() {
        let mut s = supplier(7, "PT Segar Jaya Abadi", "Thirst Trap");
        s.is_active = false;
        assert!(match_supplier(&fragments(&["Thirst Trap"]), &[s], 0.6).is_none());
    }

    #[test]
    fn test_best_overlap_wins_across_suppliers() {
        let registry = vec![
            supplier(1, "Sumber Pangan Utama", "Meat Man"),
            supplier(2, "Sumber Rejeki", "Fish Guy"),
        ];
        // Full second name present, half of the first.
        let found =
            match_supplier(&fragments(&["SUMBER REJEKI PANGAN"]), &registry, 0.6).unwrap();
        assert_eq!(found.value.supplier_id, 2);
        assert_eq!(found.score, 1.0);
    }

    #[test]
    fn test_overlap_fraction_monotonic() {
        let name = "Sumber Pangan Utama";
        let one = overlap_fraction("SUMBER toko", name);
        let two = overlap_fraction("SUMBER PANGAN toko", name);
        let three = overlap_fraction("SUMBER PANGAN UTAMA toko", name);
        assert!(one < two && two < three);
        assert_eq!(three, 1.0);
    }

    #[test]
    fn test_earliest_fragment_breaks_tie() {
        let registry = vec![supplier(5, "Bintang Laut", "Squid Co")];
        let found = match_supplier(
            &fragments(&["nota", "Bintang Laut", "cc: Bintang Laut"]),
            &registry,
            0.6,
        )
        .unwrap();
        assert_eq!(found.line, 1);
    }
}
