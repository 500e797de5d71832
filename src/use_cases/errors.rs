use derive_more::derive::{Display, Error};

use crate::domain::account_client::AccountClientError;

#[derive(Debug, Display, Error)]
pub enum PaymentError {
	#[display("Invalid payment: {reason}")]
	Validation { reason: String },
	#[display("Account {account_number} was not found")]
	AccountNotFound { account_number: String },
	#[display("{source}")]
	RemoteCall { source: AccountClientError },
	#[display("Failed to publish payment event: {message}")]
	Publish { message: String },
	/// A single payment failed after it was recorded. `source` is the step
	/// that failed, never the outcome of the compensating call.
	#[display("Transaction failed, rolling back changes")]
	TransactionFailed { source: Box<PaymentError> },
	/// A bulk run stopped early. The first `processed` accounts were paid.
	#[display("Bulk payment aborted after {processed} payments: {source}")]
	BatchAborted {
		processed: usize,
		source:    Box<PaymentError>,
	},
	#[display("Unexpected failure: {message}")]
	Unexpected { message: String },
}

impl PaymentError {
	pub fn invalid(reason: impl Into<String>) -> Self {
		PaymentError::Validation {
			reason: reason.into(),
		}
	}

	pub fn unexpected(err: Box<dyn std::error::Error + Send>) -> Self {
		PaymentError::Unexpected {
			message: err.to_string(),
		}
	}

	/// Whether the failed step may have changed the remote balance anyway.
	pub fn may_have_reached_account(&self) -> bool {
		matches!(
			self,
			PaymentError::RemoteCall { source } if !source.is_definite_rejection()
		)
	}
}

impl From<AccountClientError> for PaymentError {
	fn from(err: AccountClientError) -> Self {
		match err {
			AccountClientError::NotFound { account_number } => {
				PaymentError::AccountNotFound { account_number }
			}
			other => PaymentError::RemoteCall { source: other },
		}
	}
}

pub(crate) fn validate_account_number(
	account_number: &str,
) -> Result<(), PaymentError> {
	if account_number.trim().is_empty() {
		return Err(PaymentError::invalid("account number cannot be blank"));
	}
	if matches!(account_number, "." | "..") ||
		account_number
			.chars()
			.any(|c| c.is_control() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
	{
		return Err(PaymentError::invalid(format!(
			"account number '{}' contains reserved characters",
			account_number.escape_default()
		)));
	}
	Ok(())
}

pub(crate) fn validate_amount(amount: f64) -> Result<(), PaymentError> {
	if !amount.is_finite() || amount <= 0.0 {
		return Err(PaymentError::invalid(format!(
			"amount must be greater than 0, got {amount}"
		)));
	}
	Ok(())
}
