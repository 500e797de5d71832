use std::sync::Arc;

use crate::domain::payment::Payment;
use crate::domain::repository::PaymentRepository;
use crate::use_cases::errors::PaymentError;

#[derive(Clone)]
pub struct GetAllPaymentsUseCase {
	payment_repo: Arc<dyn PaymentRepository>,
}

impl GetAllPaymentsUseCase {
	pub fn new(payment_repo: Arc<dyn PaymentRepository>) -> Self {
		Self { payment_repo }
	}

	pub async fn execute(&self) -> Result<Vec<Payment>, PaymentError> {
		self.payment_repo
			.find_all()
			.await
			.map_err(PaymentError::unexpected)
	}
}
