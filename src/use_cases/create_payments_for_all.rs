use std::sync::Arc;

use log::{error, info};

use crate::domain::account_client::AccountClient;
use crate::domain::payment::{NewPayment, PaymentRequest};
use crate::domain::queue::{Message, Queue};
use crate::domain::repository::PaymentRepository;
use crate::use_cases::dto::{CreateBulkPaymentCommand, PaymentResponse};
use crate::use_cases::errors::{PaymentError, validate_amount};

pub const DEFAULT_ACCOUNTS_PAGE_SIZE: u32 = 20;

/// Pays the same amount into every account known to the account service.
///
/// Accounts are paid one at a time, page by page. There is no compensation:
/// the first failure stops the run and is reported as `BatchAborted` together
/// with the number of accounts already paid.
#[derive(Clone)]
pub struct CreatePaymentsForAllUseCase {
	payment_repo:   Arc<dyn PaymentRepository>,
	account_client: Arc<dyn AccountClient>,
	payment_queue:  Arc<dyn Queue<PaymentRequest>>,
	page_size:      u32,
}

impl CreatePaymentsForAllUseCase {
	pub fn new(
		payment_repo: Arc<dyn PaymentRepository>,
		account_client: Arc<dyn AccountClient>,
		payment_queue: Arc<dyn Queue<PaymentRequest>>,
	) -> Self {
		Self {
			payment_repo,
			account_client,
			payment_queue,
			page_size: DEFAULT_ACCOUNTS_PAGE_SIZE,
		}
	}

	pub fn with_page_size(mut self, page_size: u32) -> Self {
		self.page_size = page_size.max(1);
		self
	}

	pub async fn execute(
		&self,
		command: CreateBulkPaymentCommand,
	) -> Result<Vec<PaymentResponse>, PaymentError> {
		validate_amount(command.amount)?;

		let mut responses = Vec::new();
		let mut page = 0;

		loop {
			let accounts = match self
				.account_client
				.get_all_accounts(page, self.page_size)
				.await
			{
				Ok(accounts) => accounts,
				Err(e) => {
					error!("Failed to fetch accounts page {page}: {e}");
					return Err(PaymentError::BatchAborted {
						processed: responses.len(),
						source:    Box::new(e.into()),
					});
				}
			};
			let has_next = accounts.has_next;

			for account in accounts.content {
				match self.pay(&account.account_number, command.amount).await {
					Ok(response) => responses.push(response),
					Err(e) => {
						error!(
							"Bulk payment stopped at account {} after {} payments: \
							 {e}",
							account.account_number,
							responses.len()
						);
						return Err(PaymentError::BatchAborted {
							processed: responses.len(),
							source:    Box::new(e),
						});
					}
				}
			}

			if !has_next {
				break;
			}
			page += 1;
		}

		info!(
			"Bulk payment of {} completed for {} accounts",
			command.amount,
			responses.len()
		);

		Ok(responses)
	}

	async fn pay(
		&self,
		account_number: &str,
		amount: f64,
	) -> Result<PaymentResponse, PaymentError> {
		let payment = self
			.payment_repo
			.save(NewPayment::now(account_number, amount))
			.await
			.map_err(PaymentError::unexpected)?;

		self.account_client
			.update_balance(&payment.account_number, payment.amount)
			.await?;

		self.payment_queue
			.push(Message::new(PaymentRequest::from(&payment)))
			.await
			.map_err(|e| PaymentError::Publish {
				message: e.to_string(),
			})?;

		Ok(PaymentResponse::from(&payment))
	}
}
