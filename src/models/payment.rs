//! Payment data models and API request types.
//!
//! This module defines:
//! - `Payment`: Stored, immutable payment record
//! - `CreatePaymentRequest`: Request body accepted from clients
//! - `NewPayment`: Fully formed payment handed to the store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a payment record.
///
/// # Database Table
///
/// Maps to the `payments` table. Payments are never updated or deleted.
///
/// # Subscription Matching
///
/// `subscription_name` is plain text. It is expected to match a subscription's
/// `name` but nothing enforces that.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Store-assigned identifier
    pub id: i64,

    /// Name of the subscription this payment was made for
    pub subscription_name: String,

    /// Amount paid
    pub amount: f64,

    /// Server date at creation, formatted `YYYY-MM-DD`
    pub date: String,
}

/// Request body for recording a payment.
///
/// # JSON Example
///
/// ```json
/// {
///   "subscriptionName": "Netflix",
///   "amount": 15.99
/// }
/// ```
///
/// A `date` field, if present, is dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub subscription_name: String,
    pub amount: f64,
}

/// Payment ready to be persisted, with its date already fixed by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub subscription_name: String,
    pub amount: f64,
    pub date: String,
}

impl NewPayment {
    /// Build a payment dated `today`, discarding anything the client said about dates.
    pub fn dated(request: CreatePaymentRequest, today: NaiveDate) -> Self {
        Self {
            subscription_name: request.subscription_name,
            amount: request.amount,
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Attach a store-assigned id, producing the stored record.
    pub fn into_payment(self, id: i64) -> Payment {
        Payment {
            id,
            subscription_name: self.subscription_name,
            amount: self.amount,
            date: self.date,
        }
    }
}
