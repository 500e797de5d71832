use std::sync::Arc;

use crate::domain::notification::{Notification, NotificationSender};
use crate::domain::payment::PaymentRequest;

#[derive(Clone)]
pub struct NotifyPaymentUseCase {
	sender: Arc<dyn NotificationSender>,
}

impl NotifyPaymentUseCase {
	pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
		Self { sender }
	}

	pub async fn execute(
		&self,
		event: PaymentRequest,
	) -> Result<Notification, Box<dyn std::error::Error + Send>> {
		let notification = Notification::for_payment(&event);
		self.sender.send(notification.clone()).await?;
		Ok(notification)
	}
}
