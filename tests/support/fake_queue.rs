use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use payment_ledger::domain::payment::PaymentRequest;
use payment_ledger::domain::queue::{Message, Queue};

/// Queue double that keeps every pushed event and can be told to reject
/// pushes or pops.
#[derive(Default)]
pub struct RecordingQueue {
	messages:  Mutex<VecDeque<Message<PaymentRequest>>>,
	published: Mutex<Vec<PaymentRequest>>,
	fail_push: AtomicBool,
	fail_pop:  AtomicBool,
}

impl RecordingQueue {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fail_push(&self) {
		self.fail_push.store(true, Ordering::SeqCst);
	}

	pub fn fail_pop(&self) {
		self.fail_pop.store(true, Ordering::SeqCst);
	}

	pub fn published(&self) -> Vec<PaymentRequest> {
		self.published.lock().unwrap().clone()
	}
}

#[async_trait]
impl Queue<PaymentRequest> for RecordingQueue {
	async fn pop(
		&self,
	) -> Result<Option<Message<PaymentRequest>>, Box<dyn std::error::Error + Send>>
	{
		if self.fail_pop.load(Ordering::SeqCst) {
			return Err(Box::new(std::io::Error::other("broker unavailable")));
		}
		Ok(self.messages.lock().unwrap().pop_front())
	}

	async fn push(
		&self,
		message: Message<PaymentRequest>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		if self.fail_push.load(Ordering::SeqCst) {
			return Err(Box::new(std::io::Error::other("broker unavailable")));
		}
		self.published.lock().unwrap().push(message.body.clone());
		self.messages.lock().unwrap().push_back(message);
		Ok(())
	}
}
