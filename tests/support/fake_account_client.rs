use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use payment_ledger::domain::account::{Account, Page};
use payment_ledger::domain::account_client::{AccountClient, AccountClientError};

#[derive(Debug, Clone, PartialEq)]
pub enum AccountCall {
	UpdateBalance(String, f64),
	RollbackBalance(String, f64),
	GetAllAccounts(u32, u32),
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
	NotFound,
	ServerError,
	CircuitOpen,
	ConnectionRefused,
}

impl Failure {
	async fn into_error(self, account_number: &str) -> AccountClientError {
		match self {
			Failure::NotFound => AccountClientError::NotFound {
				account_number: account_number.to_string(),
			},
			Failure::ServerError => AccountClientError::Status { status: 500 },
			Failure::CircuitOpen => AccountClientError::CircuitOpen,
			Failure::ConnectionRefused => AccountClientError::Transport {
				source: refused_connection().await,
			},
		}
	}
}

/// A real connect error: nothing listens on the discard port.
async fn refused_connection() -> reqwest::Error {
	match reqwest::Client::new().get("http://127.0.0.1:9/").send().await {
		Ok(resp) => panic!("unexpected answer from discard port: {}", resp.status()),
		Err(e) => e,
	}
}

/// Account service double that pages over a fixed account list and records
/// every call it receives.
#[derive(Default)]
pub struct FakeAccountClient {
	accounts:         Vec<Account>,
	update_failures:  Mutex<HashMap<String, Failure>>,
	rollback_failure: Mutex<Option<Failure>>,
	page_failure:     Mutex<Option<(u32, Failure)>>,
	calls:            Mutex<Vec<AccountCall>>,
}

impl FakeAccountClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_accounts(count: usize) -> Self {
		let accounts = (1..=count)
			.map(|i| Account {
				account_number: account_number(i),
				balance:        1000.0,
				employee_id:    i as i64,
			})
			.collect();

		Self {
			accounts,
			..Self::default()
		}
	}

	pub fn fail_update(&self, account_number: &str, failure: Failure) {
		self.update_failures
			.lock()
			.unwrap()
			.insert(account_number.to_string(), failure);
	}

	pub fn fail_rollback(&self, failure: Failure) {
		*self.rollback_failure.lock().unwrap() = Some(failure);
	}

	pub fn fail_page(&self, page: u32, failure: Failure) {
		*self.page_failure.lock().unwrap() = Some((page, failure));
	}

	pub fn calls(&self) -> Vec<AccountCall> {
		self.calls.lock().unwrap().clone()
	}

	pub fn updates(&self) -> Vec<AccountCall> {
		self.calls()
			.into_iter()
			.filter(|c| matches!(c, AccountCall::UpdateBalance(..)))
			.collect()
	}

	pub fn rollbacks(&self) -> Vec<AccountCall> {
		self.calls()
			.into_iter()
			.filter(|c| matches!(c, AccountCall::RollbackBalance(..)))
			.collect()
	}

	pub fn page_requests(&self) -> Vec<AccountCall> {
		self.calls()
			.into_iter()
			.filter(|c| matches!(c, AccountCall::GetAllAccounts(..)))
			.collect()
	}

	fn record(&self, call: AccountCall) {
		self.calls.lock().unwrap().push(call);
	}
}

pub fn account_number(i: usize) -> String {
	format!("acc{i:03}")
}

#[async_trait]
impl AccountClient for FakeAccountClient {
	async fn update_balance(
		&self,
		account_number: &str,
		delta: f64,
	) -> Result<(), AccountClientError> {
		self.record(AccountCall::UpdateBalance(account_number.to_string(), delta));

		let failure = self
			.update_failures
			.lock()
			.unwrap()
			.get(account_number)
			.copied();
		match failure {
			Some(failure) => Err(failure.into_error(account_number).await),
			None => Ok(()),
		}
	}

	async fn rollback_balance(
		&self,
		account_number: &str,
		delta: f64,
	) -> Result<(), AccountClientError> {
		self.record(AccountCall::RollbackBalance(
			account_number.to_string(),
			delta,
		));

		let failure = *self.rollback_failure.lock().unwrap();
		match failure {
			Some(failure) => Err(failure.into_error(account_number).await),
			None => Ok(()),
		}
	}

	async fn get_all_accounts(
		&self,
		page: u32,
		page_size: u32,
	) -> Result<Page<Account>, AccountClientError> {
		self.record(AccountCall::GetAllAccounts(page, page_size));

		let page_failure = *self.page_failure.lock().unwrap();
		if let Some((failing_page, failure)) = page_failure &&
			failing_page == page
		{
			return Err(failure.into_error("all").await);
		}

		let start = (page as usize) * (page_size as usize);
		let end = (start + page_size as usize).min(self.accounts.len());
		let content = if start < end {
			self.accounts[start..end].to_vec()
		} else {
			Vec::new()
		};

		Ok(Page {
			content,
			page,
			size: page_size,
			total_elements: self.accounts.len() as u64,
			has_next: end < self.accounts.len(),
		})
	}
}
