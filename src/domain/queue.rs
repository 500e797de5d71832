use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope carried on the broker; `id` only serves log correlation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Message<B> {
	pub id:   Uuid,
	pub body: B,
}

impl<B> Message<B> {
	pub fn new(body: B) -> Message<B> {
		Message {
			id: Uuid::new_v4(),
			body,
		}
	}
}

/// Durable FIFO between the ledger and its consumers.
///
/// `push` is fire-and-forget: it returns once the broker accepted the message,
/// with no delivery acknowledgement from consumers.
#[async_trait]
pub trait Queue<B>: Send + Sync + 'static {
	async fn pop(
		&self,
	) -> Result<Option<Message<B>>, Box<dyn std::error::Error + Send>>;
	async fn push(
		&self,
		message: Message<B>,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
}
