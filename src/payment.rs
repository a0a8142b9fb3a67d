//! Mock payment processing
//!
//! Simulates a payment processor: validates the request, then either
//! returns a transaction record or a typed decline. No network, no real
//! money. The decline rules mirror common processor test cards so demo
//! flows can exercise both outcomes deterministically.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Card number suffix that always declines, as processor sandboxes do
const DECLINE_LAST4: &str = "0002";

/// Single-transaction cap for the mock processor, in cents
const MAX_AMOUNT_CENTS: i64 = 10_000_000;

/// Errors the mock processor can return
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("amount must be positive")]
    NonPositiveAmount,

    #[error("amount exceeds the ${max:.2} transaction limit", max = MAX_AMOUNT_CENTS as f64 / 100.0)]
    AmountTooLarge,

    #[error("card ending in {0} was declined")]
    CardDeclined(String),
}

/// How the payer wants to pay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum PaymentMethod {
    Card { last4: String },
    BankTransfer,
}

/// A payment to process
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub amount_cents: i64,
    pub method: PaymentMethod,
    /// Free-form reference shown on the receipt (e.g. an event id)
    pub reference: String,
}

/// A completed mock transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub amount_cents: i64,
    pub method: PaymentMethod,
    pub reference: String,
    pub completed_at: DateTime<Utc>,
}

/// Run one payment through the mock processor
pub fn process_payment(request: &PaymentRequest) -> Result<Transaction, PaymentError> {
    if request.amount_cents <= 0 {
        return Err(PaymentError::NonPositiveAmount);
    }
    if request.amount_cents > MAX_AMOUNT_CENTS {
        return Err(PaymentError::AmountTooLarge);
    }
    if let PaymentMethod::Card { last4 } = &request.method
        && last4 == DECLINE_LAST4
    {
        return Err(PaymentError::CardDeclined(last4.clone()));
    }

    let completed_at = Utc::now();
    Ok(Transaction {
        id: format!("txn_{}", completed_at.timestamp_micros()),
        amount_cents: request.amount_cents,
        method: request.method.clone(),
        reference: request.reference.clone(),
        completed_at,
    })
}

#[cfg(test)]
#[path = "payment_tests.rs"]
mod payment_tests;
