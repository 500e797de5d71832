use std::error::Error;

use async_trait::async_trait;
use log::info;

use crate::domain::notification::{Notification, NotificationSender};

/// Delivers notifications to the service log.
#[derive(Clone, Default)]
pub struct LogNotificationSender;

#[async_trait]
impl NotificationSender for LogNotificationSender {
	async fn send(
		&self,
		notification: Notification,
	) -> Result<(), Box<dyn Error + Send>> {
		info!(
			"Sending notification to {}: {}",
			notification.recipient, notification.message
		);
		Ok(())
	}
}
