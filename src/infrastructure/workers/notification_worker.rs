use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::time::sleep;

use crate::domain::payment::PaymentRequest;
use crate::domain::queue::Queue;
use crate::use_cases::notify_payment::NotifyPaymentUseCase;

/// Outcome of one pass over the payment queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStep {
	Delivered,
	Idle,
	Failed,
}

pub async fn notification_worker(
	queue: Arc<dyn Queue<PaymentRequest>>,
	notify_payment_use_case: NotifyPaymentUseCase,
) {
	loop {
		match process_next(queue.as_ref(), &notify_payment_use_case).await {
			WorkerStep::Delivered => {}
			WorkerStep::Idle => sleep(Duration::from_millis(100)).await,
			WorkerStep::Failed => sleep(Duration::from_secs(1)).await,
		}
	}
}

/// Pops one payment event and notifies its account holder.
///
/// A notification that fails to send is dropped after logging; events carry
/// no delivery guarantee.
pub async fn process_next(
	queue: &dyn Queue<PaymentRequest>,
	notify_payment_use_case: &NotifyPaymentUseCase,
) -> WorkerStep {
	let message = match queue.pop().await {
		Ok(Some(message)) => message,
		Ok(None) => return WorkerStep::Idle,
		Err(e) => {
			error!("Failed to pop from payment queue: {e}");
			return WorkerStep::Failed;
		}
	};

	let message_id = message.id;
	info!(
		"Received payment event '{}' for account {}",
		message_id, message.body.account_number
	);

	match notify_payment_use_case.execute(message.body).await {
		Ok(_) => {
			info!("Payment event '{message_id}' notified.");
			WorkerStep::Delivered
		}
		Err(e) => {
			error!("Failed to notify payment event '{message_id}': {e}");
			WorkerStep::Failed
		}
	}
}
