use std::error::Error;

use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::payment::PaymentRequest;
use crate::domain::queue::{Message, Queue};
use crate::infrastructure::config::redis::PAYMENT_QUEUE_KEY;

/// Redis list used as the payment notification queue.
///
/// Producers `LPUSH`, consumers `BRPOP`, which gives FIFO order.
#[derive(Clone)]
pub struct RedisPaymentQueue {
	client:          Client,
	pop_timeout_sec: f64,
}

impl RedisPaymentQueue {
	pub fn new(client: Client) -> Self {
		Self {
			client,
			pop_timeout_sec: 1.0,
		}
	}
}

#[async_trait]
impl Queue<PaymentRequest> for RedisPaymentQueue {
	async fn pop(
		&self,
	) -> Result<Option<Message<PaymentRequest>>, Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		let popped_value: Option<(String, String)> = con
			.brpop(PAYMENT_QUEUE_KEY, self.pop_timeout_sec)
			.await
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		let Some((_queue_name, serialized_message)) = popped_value else {
			return Ok(None);
		};

		let message: Message<PaymentRequest> =
			serde_json::from_str(&serialized_message)
				.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		Ok(Some(message))
	}

	async fn push(
		&self,
		message: Message<PaymentRequest>,
	) -> Result<(), Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		let serialized_message = serde_json::to_string(&message)
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		let _: () = con
			.lpush(PAYMENT_QUEUE_KEY, serialized_message)
			.await
			.map_err(|e| Box::new(e) as Box<dyn Error + Send>)?;

		log::debug!("Message {} pushed to {PAYMENT_QUEUE_KEY}", message.id);
		Ok(())
	}
}
