//! Payment-terms calendar rules.
//!
//! Due dates are a pure function of `(invoice_date, payment_terms)`:
//! cash is due immediately, two-week suppliers are paid on the 15th or at
//! month end depending on which half of the month the invoice falls in, and
//! monthly suppliers collect everything at month end.

use chrono::{Datelike, NaiveDate};

use crate::models::supplier::PaymentTerms;

/// Compute the payment due date for an invoice.
pub fn due_date(invoice_date: NaiveDate, terms: PaymentTerms) -> NaiveDate {
    match terms {
        PaymentTerms::Cash => invoice_date,
        PaymentTerms::TwoWeek => {
            if invoice_date.day() < 15 {
                // from_ymd_opt cannot fail: every month has a 15th
                NaiveDate::from_ymd_opt(invoice_date.year(), invoice_date.month(), 15)
                    .unwrap_or(invoice_date)
            } else {
                last_day_of_month(invoice_date)
            }
        }
        PaymentTerms::Monthly => last_day_of_month(invoice_date),
    }
}

/// Last calendar day of the given date's month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}
