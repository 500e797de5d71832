use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::account::{Account, Page};

#[derive(Debug, Display, Error)]
pub enum AccountClientError {
	#[display("Account {account_number} was not found")]
	NotFound { account_number: String },
	#[display("Account service rejected the request with status {status}")]
	Rejected { status: u16 },
	#[display("Account service failed with status {status}")]
	Status { status: u16 },
	#[display("Account service call failed: {source}")]
	Transport { source: reqwest::Error },
	#[display("Account service circuit is open")]
	CircuitOpen,
	#[display("Account service call did not complete: {message}")]
	Unavailable { message: String },
	#[display("Invalid account service URL: {message}")]
	InvalidUrl { message: String },
}

impl AccountClientError {
	/// True when the account service definitely did not apply the request.
	///
	/// A failed connect never reached the server. Other transport failures and
	/// 5xx answers are ambiguous: the remote side may have committed the change
	/// before the failure was observed.
	pub fn is_definite_rejection(&self) -> bool {
		match self {
			AccountClientError::NotFound { .. } |
			AccountClientError::Rejected { .. } |
			AccountClientError::CircuitOpen |
			AccountClientError::InvalidUrl { .. } => true,
			AccountClientError::Transport { source } => source.is_connect(),
			AccountClientError::Status { .. } |
			AccountClientError::Unavailable { .. } => false,
		}
	}
}

/// Remote operations the ledger needs from the account service.
#[async_trait]
pub trait AccountClient: Send + Sync + 'static {
	async fn update_balance(
		&self,
		account_number: &str,
		delta: f64,
	) -> Result<(), AccountClientError>;

	/// Reverses a previous `update_balance` of the same `delta`.
	///
	/// Not idempotent: calling it twice debits twice.
	async fn rollback_balance(
		&self,
		account_number: &str,
		delta: f64,
	) -> Result<(), AccountClientError>;

	async fn get_all_accounts(
		&self,
		page: u32,
		page_size: u32,
	) -> Result<Page<Account>, AccountClientError>;
}
