use std::sync::Arc;

use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::errors::{PaymentError, validate_account_number};

/// Lists the payments recorded for one account.
///
/// An account without payments yields an empty list, not `AccountNotFound`:
/// the ledger cannot tell an unknown account from one never paid.
#[derive(Clone)]
pub struct GetPaymentsByAccountUseCase {
	payment_repo: Arc<dyn PaymentRepository>,
}

impl GetPaymentsByAccountUseCase {
	pub fn new(payment_repo: Arc<dyn PaymentRepository>) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(
		&self,
		account_number: &str,
	) -> Result<Vec<Payment>, PaymentError> {
		validate_account_number(account_number)?;

		self.payment_repo
			.find_by_account_number(account_number)
			.await
			.map_err(PaymentError::unexpected)
	}
}
