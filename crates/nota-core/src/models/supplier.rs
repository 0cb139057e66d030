//! Supplier registry models.
//!
//! The registry is a read-only snapshot of the suppliers table handed to the
//! scanner; nothing in this crate mutates it.

use serde::{Deserialize, Serialize};

/// A supplier we buy from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Database identifier.
    pub id: i64,

    /// Official/legal company name.
    pub company_name: String,

    /// Everyday nickname used on orders and in the UI.
    pub short_name: String,

    /// Supplier category (Food, Drinks, Operational).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Payment terms driving due-date computation.
    #[serde(default)]
    pub payment_terms: PaymentTerms,

    /// How the supplier handles PPN on their invoices.
    #[serde(default)]
    pub ppn_handling: PpnHandling,

    /// Inactive suppliers are kept for history but never matched.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Supplier-level payment policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTerms {
    /// Pay on delivery.
    #[default]
    #[serde(rename = "cash")]
    Cash,

    /// Month split in half: pay on the 15th or at month end.
    #[serde(rename = "2week")]
    TwoWeek,

    /// All orders from a month are paid at month end.
    #[serde(rename = "monthly")]
    Monthly,
}

impl PaymentTerms {
    /// Parse payment terms from the stored string form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Some(PaymentTerms::Cash),
            "2week" | "two-week" | "twoweek" => Some(PaymentTerms::TwoWeek),
            "monthly" => Some(PaymentTerms::Monthly),
            _ => None,
        }
    }
}

/// PPN (value-added tax) handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PpnHandling {
    /// The invoice total is final, tax already included.
    #[default]
    Included,

    /// Tax is added on top of the printed subtotal.
    Added,
}

impl Supplier {
    /// Load a registry snapshot from a JSON file.
    pub fn load_registry(path: &std::path::Path) -> crate::Result<Vec<Supplier>> {
        let content = std::fs::read_to_string(path)?;
        let suppliers = serde_json::from_str(&content)?;
        Ok(suppliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_terms_from_str() {
        assert_eq!(PaymentTerms::from_str("cash"), Some(PaymentTerms::Cash));
        assert_eq!(PaymentTerms::from_str("2week"), Some(PaymentTerms::TwoWeek));
        assert_eq!(PaymentTerms::from_str("MONTHLY"), Some(PaymentTerms::Monthly));
        assert_eq!(PaymentTerms::from_str("net30"), None);
    }

    #[test]
    fn test_registry_json_round_trip() {
        let json = r#"[
            {
                "id": 1,
                "company_name": "PT Segar Jaya Abadi",
                "short_name": "Thirst Trap",
                "category": "Drinks",
                "payment_terms": "2week",
                "ppn_handling": "included",
                "is_active": true
            }
        ]"#;

        let suppliers: Vec<Supplier> = serde_json::from_str(json).unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].short_name, "Thirst Trap");
        assert_eq!(suppliers[0].payment_terms, PaymentTerms::TwoWeek);
    }

    #[test]
    fn test_registry_defaults() {
        let json = r#"[{"id": 2, "company_name": "CV Tani Makmur", "short_name": "Veggie Guy"}]"#;
        let suppliers: Vec<Supplier> = serde_json::from_str(json).unwrap();
        assert_eq!(suppliers[0].payment_terms, PaymentTerms::Cash);
        assert_eq!(suppliers[0].ppn_handling, PpnHandling::Included);
        assert!(suppliers[0].is_active);
    }
}
