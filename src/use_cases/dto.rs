use serde::{Deserialize, Serialize};

use crate::domain::payment::Payment;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentCommand {
	pub account_number: String,
	pub amount:         f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateBulkPaymentCommand {
	pub amount: f64,
}

/// Per-account summary returned by a bulk payment run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
	pub account_number: String,
	pub amount:         f64,
}

impl From<&Payment> for PaymentResponse {
	fn from(payment: &Payment) -> Self {
		Self {
			account_number: payment.account_number.clone(),
			amount:         payment.amount,
		}
	}
}
