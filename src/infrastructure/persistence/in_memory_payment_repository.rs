use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::payment::{NewPayment, Payment};
use crate::domain::repository::PaymentRepository;

#[derive(Default)]
struct State {
	next_id:  u64,
	payments: Vec<Payment>,
}

/// Process-local store. Ids start at 1 and grow by one per save.
#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
	state: Arc<RwLock<State>>,
}

impl InMemoryPaymentRepository {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.state.read().await.payments.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.len().await == 0
	}
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
	async fn save(
		&self,
		payment: NewPayment,
	) -> Result<Payment, Box<dyn Error + Send>> {
		let mut state = self.state.write().await;
		state.next_id += 1;
		let payment = payment.with_id(state.next_id);
		state.payments.push(payment.clone());
		Ok(payment)
	}

	async fn find_by_account_number(
		&self,
		account_number: &str,
	) -> Result<Vec<Payment>, Box<dyn Error + Send>> {
		let state = self.state.read().await;
		Ok(state
			.payments
			.iter()
			.filter(|p| p.account_number == account_number)
			.cloned()
			.collect())
	}

	async fn find_all(&self) -> Result<Vec<Payment>, Box<dyn Error + Send>> {
		Ok(self.state.read().await.payments.clone())
	}
}
