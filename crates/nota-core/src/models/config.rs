//! Configuration for the scanning pipeline.
//!
//! All plausibility bounds and scoring weights live here as plain data so
//! they can be tuned without touching the scanning code.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main configuration for the invoice scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Fraction of supplier-name words that must appear in the document for
    /// a fuzzy supplier match (0.0 - 1.0).
    pub word_overlap_threshold: f32,

    /// Inclusive year range a parsed date must fall in to be plausible.
    pub year_range: (i32, i32),

    /// Inclusive bounds for a plausible invoice total, in rupiah. Values
    /// below are line-item-scale noise; values above are account numbers.
    pub amount_bounds: (i64, i64),

    /// Inclusive bounds for a plausible line-item quantity.
    pub quantity_bounds: (f64, f64),

    /// Inclusive bounds for a plausible line-item unit price, in rupiah.
    pub price_bounds: (i64, i64),

    /// Scoring weights shared by all suppliers.
    pub weights: ScoreWeights,

    /// Per-supplier weight adjustments, keyed by supplier id. Populated from
    /// confirmed corrections so a supplier's documents score differently on
    /// later scans.
    pub supplier_overrides: HashMap<i64, ScoreWeightsPatch>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            word_overlap_threshold: 0.6,
            year_range: (2020, 2030),
            amount_bounds: (5_000, 999_999_999),
            quantity_bounds: (1.0, 10_000.0),
            price_bounds: (1, 10_000_000),
            weights: ScoreWeights::default(),
            supplier_overrides: HashMap::new(),
        }
    }
}

/// Additive scoring weights for candidate selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Bonus for an amount on a line with a total keyword.
    pub total_keyword: f32,

    /// Bonus for an amount in the bottom portion of the document.
    pub bottom_position: f32,

    /// Document fraction past which a fragment counts as "bottom".
    pub bottom_fraction: f32,

    /// Bonus for amounts at or above `large_amount_floor`.
    pub magnitude: f32,

    /// Rupiah floor above which an amount earns the magnitude bonus.
    pub large_amount_floor: i64,

    /// Bonus for a date on a line with a date label keyword.
    pub date_keyword: f32,

    /// Bonus for a date in the top portion of the document.
    pub top_position: f32,

    /// Document fraction below which a fragment counts as "top".
    pub top_fraction: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            total_keyword: 100.0,
            bottom_position: 50.0,
            bottom_fraction: 0.7,
            magnitude: 10.0,
            large_amount_floor: 100_000,
            date_keyword: 100.0,
            top_position: 25.0,
            top_fraction: 0.3,
        }
    }
}

/// Partial override of [`ScoreWeights`] for one supplier. Unset fields keep
/// the shared value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeightsPatch {
    pub total_keyword: Option<f32>,
    pub bottom_position: Option<f32>,
    pub bottom_fraction: Option<f32>,
    pub magnitude: Option<f32>,
    pub large_amount_floor: Option<i64>,
    pub date_keyword: Option<f32>,
    pub top_position: Option<f32>,
    pub top_fraction: Option<f32>,
}

impl ScoreWeights {
    /// Apply a per-supplier patch on top of these weights.
    pub fn patched(&self, patch: &ScoreWeightsPatch) -> ScoreWeights {
        ScoreWeights {
            total_keyword: patch.total_keyword.unwrap_or(self.total_keyword),
            bottom_position: patch.bottom_position.unwrap_or(self.bottom_position),
            bottom_fraction: patch.bottom_fraction.unwrap_or(self.bottom_fraction),
            magnitude: patch.magnitude.unwrap_or(self.magnitude),
            large_amount_floor: patch.large_amount_floor.unwrap_or(self.large_amount_floor),
            date_keyword: patch.date_keyword.unwrap_or(self.date_keyword),
            top_position: patch.top_position.unwrap_or(self.top_position),
            top_fraction: patch.top_fraction.unwrap_or(self.top_fraction),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Weights to use for a document matched to the given supplier.
    pub fn weights_for(&self, supplier_id: Option<i64>) -> ScoreWeights {
        match supplier_id.and_then(|id| self.supplier_overrides.get(&id)) {
            Some(patch) => self.weights.patched(patch),
            None => self.weights.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trip() {
        let config = ScanConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.amount_bounds, (5_000, 999_999_999));
        assert_eq!(back.year_range, (2020, 2030));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ScanConfig = serde_json::from_str(r#"{"word_overlap_threshold": 0.8}"#).unwrap();
        assert_eq!(config.word_overlap_threshold, 0.8);
        assert_eq!(config.weights.total_keyword, 100.0);
    }

    #[test]
    fn test_supplier_override_patch() {
        let mut config = ScanConfig::default();
        config.supplier_overrides.insert(
            7,
            ScoreWeightsPatch {
                bottom_position: Some(0.0),
                ..Default::default()
            },
        );

        let patched = config.weights_for(Some(7));
        assert_eq!(patched.bottom_position, 0.0);
        assert_eq!(patched.total_keyword, 100.0);

        let unpatched = config.weights_for(Some(8));
        assert_eq!(unpatched.bottom_position, 50.0);

        let no_supplier = config.weights_for(None);
        assert_eq!(no_supplier.bottom_position, 50.0);
    }
}
