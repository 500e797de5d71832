use std::collections::VecDeque;
use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::queue::{Message, Queue};

/// FIFO kept in process memory. `pop` never blocks.
#[derive(Clone)]
pub struct InMemoryQueue<B> {
	messages: Arc<Mutex<VecDeque<Message<B>>>>,
}

impl<B> InMemoryQueue<B> {
	pub fn new() -> Self {
		Self {
			messages: Arc::new(Mutex::new(VecDeque::new())),
		}
	}

	pub async fn len(&self) -> usize {
		self.messages.lock().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.messages.lock().await.is_empty()
	}
}

impl<B> Default for InMemoryQueue<B> {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl<B: Send + 'static> Queue<B> for InMemoryQueue<B> {
	async fn pop(&self) -> Result<Option<Message<B>>, Box<dyn Error + Send>> {
		Ok(self.messages.lock().await.pop_front())
	}

	async fn push(&self, message: Message<B>) -> Result<(), Box<dyn Error + Send>> {
		self.messages.lock().await.push_back(message);
		Ok(())
	}
}
