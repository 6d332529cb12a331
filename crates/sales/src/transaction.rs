use chrono::{DateTime, Utc};
use serde::Serialize;

use smartvend_core::{DomainError, DomainResult, TransactionId};

/// Record of one completed purchase.
///
/// Captures the product sold, the amount charged, the change handed back,
/// and when the purchase happened. Immutable after construction: all fields
/// are private and no method mutates them, so a logged record can never be
/// edited into an invalid one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    product_name: String,
    amount_paid: f64,
    change_given: f64,
    occurred_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a purchase of `product_name` charging `amount_paid` and
    /// returning `change_given`, stamped with `occurred_at`.
    ///
    /// Assigns a fresh time-ordered id. Fails if the product name trims to
    /// empty or either amount is negative or non-finite.
    pub fn new(
        product_name: &str,
        amount_paid: f64,
        change_given: f64,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(DomainError::invalid_argument(
                "product name cannot be empty",
            ));
        }
        check_amount("amount paid", amount_paid)?;
        check_amount("change given", change_given)?;

        Ok(Self {
            id: TransactionId::new(),
            product_name: product_name.to_string(),
            amount_paid,
            change_given,
            occurred_at,
        })
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn amount_paid(&self) -> f64 {
        self.amount_paid
    }

    pub fn change_given(&self) -> f64 {
        self.change_given
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Total the customer had inserted: amount charged plus change returned.
    pub fn total_amount_inserted(&self) -> f64 {
        self.amount_paid + self.change_given
    }

    /// Check if change was handed back on this purchase.
    pub fn has_change(&self) -> bool {
        self.change_given > 0.0
    }

    /// Customer-facing receipt line.
    pub fn receipt_line(&self) -> String {
        format!(
            "Purchase: {} | Amount Paid: ${:.2} | Change: ${:.2} | Date: {}",
            self.product_name,
            self.amount_paid,
            self.change_given,
            self.occurred_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

fn check_amount(label: &str, amount: f64) -> DomainResult<()> {
    if !amount.is_finite() {
        return Err(DomainError::invalid_argument(format!(
            "{label} must be finite"
        )));
    }
    if amount < 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{label} cannot be negative"
        )));
    }
    Ok(())
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (paid ${:.2}, change ${:.2}) at {}",
            self.product_name,
            self.amount_paid,
            self.change_given,
            self.occurred_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}
