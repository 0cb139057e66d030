//! Invoice draft models matching the persisted bookkeeping schema.
//!
//! The scanner never writes to the store; these types are the shape a
//! human-confirmed extraction is handed off in. Column names and the
//! `payment_status`/`payment_method` value sets mirror the `invoices` and
//! `invoice_items` tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::supplier::Supplier;
use crate::terms::due_date;

/// A confirmed invoice ready to be written to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Matched supplier.
    pub supplier_id: i64,

    /// Printed invoice number, if the supplier uses one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Date on the invoice.
    pub invoice_date: NaiveDate,

    /// Due date derived from the supplier's payment terms.
    pub due_date: NaiveDate,

    /// Invoice total in rupiah.
    pub total_amount: Decimal,

    /// Payment state.
    pub payment_status: PaymentStatus,

    /// How the invoice was (or will be) paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    /// Line items, in invoice order.
    pub items: Vec<ItemDraft>,

    /// Flagged when the person entering it wants the details double-checked.
    #[serde(default)]
    pub needs_review: bool,
}

/// One confirmed line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Product name as printed on the invoice.
    pub product_name: String,

    /// Quantity purchased.
    pub quantity: Decimal,

    /// Unit of measure (kg, liter, pcs, ...).
    pub unit: String,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Line total. Not required to equal `unit_price * quantity`; invoices
    /// carry rounding and hand-written discounts.
    pub total_price: Decimal,
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

/// Payment method recorded on settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

impl InvoiceDraft {
    /// Build a pending draft from confirmed values, deriving the due date
    /// from the supplier's payment terms.
    pub fn from_confirmed(
        supplier: &Supplier,
        invoice_date: NaiveDate,
        total_amount: Decimal,
    ) -> Self {
        Self {
            supplier_id: supplier.id,
            invoice_number: None,
            invoice_date,
            due_date: due_date(invoice_date, supplier.payment_terms),
            total_amount,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            items: Vec::new(),
            needs_review: false,
        }
    }

    /// Whether a pending invoice has slipped past its due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.payment_status == PaymentStatus::Pending && self.due_date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::supplier::{PaymentTerms, PpnHandling};

    fn supplier(terms: PaymentTerms) -> Supplier {
        Supplier {
            id: 7,
            company_name: "PT Segar Jaya Abadi".to_string(),
            short_name: "Thirst Trap".to_string(),
            category: Some("Drinks".to_string()),
            payment_terms: terms,
            ppn_handling: PpnHandling::Included,
            is_active: true,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_confirmed_derives_due_date() {
        let draft = InvoiceDraft::from_confirmed(
            &supplier(PaymentTerms::TwoWeek),
            ymd(2025, 12, 19),
            Decimal::from(4_000_000),
        );

        assert_eq!(draft.supplier_id, 7);
        assert_eq!(draft.due_date, ymd(2025, 12, 31));
        assert_eq!(draft.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn test_is_overdue() {
        let mut draft = InvoiceDraft::from_confirmed(
            &supplier(PaymentTerms::Cash),
            ymd(2025, 6, 1),
            Decimal::from(250_000),
        );

        assert!(draft.is_overdue(ymd(2025, 6, 2)));
        assert!(!draft.is_overdue(ymd(2025, 6, 1)));

        draft.payment_status = PaymentStatus::Paid;
        assert!(!draft.is_overdue(ymd(2025, 6, 2)));
    }
}
