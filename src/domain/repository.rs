use async_trait::async_trait;

use crate::domain::payment::{NewPayment, Payment};

#[async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
	/// Stores the payment and returns it with its assigned id.
	async fn save(
		&self,
		payment: NewPayment,
	) -> Result<Payment, Box<dyn std::error::Error + Send>>;
	async fn find_by_account_number(
		&self,
		account_number: &str,
	) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send>>;
	async fn find_all(
		&self,
	) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send>>;
}
