//! Invoice photo text scanning.
//!
//! The OCR engine itself is external: it hands this module an ordered
//! sequence of [`TextFragment`]s, and the scanner turns them into scored
//! field candidates for human review.

pub mod pipeline;
pub mod rules;

pub use pipeline::{ExtractionResult, InvoiceScanner};
pub use rules::{Candidate, ItemGuess, NameKind, SupplierMatch};

use serde::{Deserialize, Serialize};

/// One unit of recognized text with its approximate document position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Recognized text, trimmed.
    pub text: String,

    /// Index in reading order (top to bottom).
    pub line: usize,

    /// Vertical offset fraction in [0, 1]; 0.0 is the top of the document.
    pub position: f32,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, line: usize, position: f32) -> Self {
        Self {
            text: text.into(),
            line,
            position,
        }
    }

    /// Split raw OCR output into an ordered fragment sequence, one fragment
    /// per non-empty line. Positions are evenly spread over the line count.
    pub fn sequence_from_text(text: &str) -> Vec<TextFragment> {
        let lines: Vec<&str> = text
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        let count = lines.len();
        lines
            .into_iter()
            .enumerate()
            .map(|(i, l)| TextFragment::new(l, i, i as f32 / count as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_from_text() {
        let fragments = TextFragment::sequence_from_text("  Thirst Trap \n\n19/12/2025\n   \nTOTAL 4000000\n");
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].text, "Thirst Trap");
        assert_eq!(fragments[1].line, 1);
        assert!(fragments[2].position > fragments[0].position);
    }

    #[test]
    fn test_sequence_from_empty_text() {
        assert!(TextFragment::sequence_from_text("").is_empty());
        assert!(TextFragment::sequence_from_text(" \n \n").is_empty());
    }
}
