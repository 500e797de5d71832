use std::sync::Arc;

use log::{error, info, warn};

use crate::domain::account_client::AccountClient;
use crate::domain::payment::{NewPayment, Payment, PaymentRequest};
use crate::domain::queue::{Message, Queue};
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::CreatePaymentCommand;
use crate::use_cases::errors::{
	PaymentError, validate_account_number, validate_amount,
};

/// Records a payment, credits the account and announces it.
///
/// The three steps commit independently. When a step after the local write
/// fails, one compensating `rollback_balance` is issued if the credit may have
/// landed, and the caller gets `TransactionFailed` wrapping the failed step.
/// The recorded payment is kept either way.
#[derive(Clone)]
pub struct CreatePaymentUseCase {
	payment_repo:   Arc<dyn PaymentRepository>,
	account_client: Arc<dyn AccountClient>,
	payment_queue:  Arc<dyn Queue<PaymentRequest>>,
}

impl CreatePaymentUseCase {
	pub fn new(
		payment_repo: Arc<dyn PaymentRepository>,
		account_client: Arc<dyn AccountClient>,
		payment_queue: Arc<dyn Queue<PaymentRequest>>,
	) -> Self {
		Self {
			payment_repo,
			account_client,
			payment_queue,
		}
	}

	pub async fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<Payment, PaymentError> {
		validate_account_number(&command.account_number)?;
		validate_amount(command.amount)?;

		let payment = self
			.payment_repo
			.save(NewPayment::now(command.account_number, command.amount))
			.await
			.map_err(PaymentError::unexpected)?;

		info!(
			"Payment {} recorded for account {}",
			payment.id, payment.account_number
		);

		let mut balance_updated = false;

		match self.credit_and_publish(&payment, &mut balance_updated).await {
			Ok(()) => {
				info!(
					"Payment {} credited {} to account {}",
					payment.id, payment.amount, payment.account_number
				);
				Ok(payment)
			}
			Err(e) => {
				warn!(
					"Payment {} for account {} failed: {e}",
					payment.id, payment.account_number
				);

				if balance_updated || e.may_have_reached_account() {
					self.compensate(&payment).await;
				}

				Err(PaymentError::TransactionFailed {
					source: Box::new(e),
				})
			}
		}
	}

	async fn credit_and_publish(
		&self,
		payment: &Payment,
		balance_updated: &mut bool,
	) -> Result<(), PaymentError> {
		self.account_client
			.update_balance(&payment.account_number, payment.amount)
			.await?;
		*balance_updated = true;

		self.payment_queue
			.push(Message::new(PaymentRequest::from(payment)))
			.await
			.map_err(|e| PaymentError::Publish {
				message: e.to_string(),
			})
	}

	async fn compensate(&self, payment: &Payment) {
		info!(
			"Rolling back {} on account {} for payment {}",
			payment.amount, payment.account_number, payment.id
		);

		if let Err(e) = self
			.account_client
			.rollback_balance(&payment.account_number, payment.amount)
			.await
		{
			error!(
				"Rollback for payment {} on account {} failed: {e}",
				payment.id, payment.account_number
			);
		}
	}
}
