use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A credit applied to one account, as recorded by the ledger.
///
/// The record is persisted before the remote balance update is attempted, so
/// its presence alone does not prove the account was credited.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
	pub id:             u64,
	pub account_number: String,
	pub amount:         f64,
	#[serde(with = "time::serde::rfc3339")]
	pub timestamp:      OffsetDateTime,
}

/// A payment that has not been given an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
	pub account_number: String,
	pub amount:         f64,
	pub timestamp:      OffsetDateTime,
}

impl NewPayment {
	pub fn now(account_number: impl Into<String>, amount: f64) -> Self {
		Self {
			account_number: account_number.into(),
			amount,
			timestamp: OffsetDateTime::now_utc(),
		}
	}

	pub fn with_id(self, id: u64) -> Payment {
		Payment {
			id,
			account_number: self.account_number,
			amount: self.amount,
			timestamp: self.timestamp,
		}
	}
}

/// Event published once an account balance has been credited.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
	pub account_number: String,
	pub amount:         f64,
}

impl From<&Payment> for PaymentRequest {
	fn from(payment: &Payment) -> Self {
		Self {
			account_number: payment.account_number.clone(),
			amount:         payment.amount,
		}
	}
}
