use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payment::PaymentRequest;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Notification {
	pub recipient: String,
	pub message:   String,
}

impl Notification {
	pub fn for_payment(event: &PaymentRequest) -> Self {
		Self {
			recipient: event.account_number.clone(),
			message:   format!(
				"account number: {} has been paid successfully with amount: {}",
				event.account_number, event.amount
			),
		}
	}
}

#[async_trait]
pub trait NotificationSender: Send + Sync + 'static {
	async fn send(
		&self,
		notification: Notification,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
}
