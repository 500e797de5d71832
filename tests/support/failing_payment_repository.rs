use async_trait::async_trait;
use payment_ledger::domain::payment::{NewPayment, Payment};
use payment_ledger::domain::repository::PaymentRepository;

fn unavailable() -> Box<dyn std::error::Error + Send> {
	Box::new(std::io::Error::other("storage unavailable"))
}

pub struct FailingPaymentRepository;

#[async_trait]
impl PaymentRepository for FailingPaymentRepository {
	async fn save(
		&self,
		_payment: NewPayment,
	) -> Result<Payment, Box<dyn std::error::Error + Send>> {
		Err(unavailable())
	}

	async fn find_by_account_number(
		&self,
		_account_number: &str,
	) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send>> {
		Err(unavailable())
	}

	async fn find_all(
		&self,
	) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send>> {
		Err(unavailable())
	}
}
