use std::time::Duration;

use async_trait::async_trait;
use circuitbreaker_rs::{BreakerError, CircuitBreaker, DefaultPolicy};
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;

use crate::domain::account::{Account, Page};
use crate::domain::account_client::{AccountClient, AccountClientError};

/// The initial delay for the exponential backoff strategy, in milliseconds.
const INITIAL_RETRY_DELAY_MS: u64 = 100;
/// The maximum possible delay between retries, in milliseconds.
const MAX_RETRY_DELAY_MS: u64 = 2000;

/// Page body as rendered by the account service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountPageResponse {
	content:        Vec<Account>,
	#[serde(default)]
	number:         u32,
	#[serde(default)]
	size:           u32,
	#[serde(default)]
	total_elements: u64,
	#[serde(default)]
	total_pages:    Option<u32>,
	#[serde(default)]
	last:           Option<bool>,
}

impl From<AccountPageResponse> for Page<Account> {
	fn from(body: AccountPageResponse) -> Self {
		let has_next = match body.last {
			Some(last) => !last,
			None => body
				.total_pages
				.is_some_and(|total_pages| body.number + 1 < total_pages),
		};

		Page {
			content: body.content,
			page: body.number,
			size: body.size,
			total_elements: body.total_elements,
			has_next,
		}
	}
}

/// Account service client over HTTP.
///
/// Every call goes through a circuit breaker. Only failures where the request
/// never reached the server are retried: balance updates are not idempotent,
/// so a request that may have been applied is never replayed.
#[derive(Clone)]
pub struct HttpAccountClient {
	http_client: Client,
	base_url:    String,
	max_retries: u32,
	breaker:     CircuitBreaker<DefaultPolicy, AccountClientError>,
}

impl HttpAccountClient {
	pub fn new(
		http_client: Client,
		base_url: &str,
		max_retries: u32,
		breaker: CircuitBreaker<DefaultPolicy, AccountClientError>,
	) -> Self {
		Self {
			http_client,
			base_url: base_url.trim_end_matches('/').to_string(),
			max_retries,
			breaker,
		}
	}

	pub fn default_breaker() -> CircuitBreaker<DefaultPolicy, AccountClientError> {
		CircuitBreaker::<DefaultPolicy, AccountClientError>::builder()
			.failure_threshold(0.5)
			.cooldown(Duration::from_secs(30))
			.build()
	}

	pub fn breaker(&self) -> &CircuitBreaker<DefaultPolicy, AccountClientError> {
		&self.breaker
	}

	/// `{base}/api/account/{segments..}` with every segment percent-encoded,
	/// so an account number can never add path segments or a query.
	fn account_url(&self, segments: &[&str]) -> Result<Url, AccountClientError> {
		let mut url =
			Url::parse(&self.base_url).map_err(|e| AccountClientError::InvalidUrl {
				message: format!("{}: {e}", self.base_url),
			})?;

		url.path_segments_mut()
			.map_err(|_| AccountClientError::InvalidUrl {
				message: format!("{} cannot be a base URL", self.base_url),
			})?
			.pop_if_empty()
			.extend(["api", "account"])
			.extend(segments);

		Ok(url)
	}

	async fn call<F>(
		&self,
		account_number: &str,
		build: F,
	) -> Result<Response, AccountClientError>
	where
		F: Fn() -> RequestBuilder + Send + Sync,
	{
		let mut attempts = 0;
		let mut delay_ms = INITIAL_RETRY_DELAY_MS;

		loop {
			attempts += 1;

			let result: Result<Response, BreakerError<AccountClientError>> = self
				.breaker
				.call_async(|| async {
					let resp = build()
						.send()
						.await
						.map_err(|source| AccountClientError::Transport { source })?;

					if resp.status().is_server_error() {
						return Err(AccountClientError::Status {
							status: resp.status().as_u16(),
						});
					}
					Ok(resp)
				})
				.await;

			let err = match result {
				Ok(resp) => return check_status(resp, account_number),
				Err(BreakerError::Open) => return Err(AccountClientError::CircuitOpen),
				Err(BreakerError::Operation(e)) => e,
				Err(e) => {
					return Err(AccountClientError::Unavailable {
						message: e.to_string(),
					});
				}
			};

			if !is_connect_error(&err) || attempts > self.max_retries {
				return Err(err);
			}

			warn!(
				"Account service unreachable: {err}. Attempt {}/{}",
				attempts,
				self.max_retries + 1
			);
			tokio::time::sleep(Duration::from_millis(delay_ms)).await;
			delay_ms = (delay_ms * 2).min(MAX_RETRY_DELAY_MS);
		}
	}
}

fn is_connect_error(err: &AccountClientError) -> bool {
	matches!(err, AccountClientError::Transport { source } if source.is_connect())
}

fn check_status(
	resp: Response,
	account_number: &str,
) -> Result<Response, AccountClientError> {
	let status = resp.status();
	if status == StatusCode::NOT_FOUND {
		return Err(AccountClientError::NotFound {
			account_number: account_number.to_string(),
		});
	}
	if status.is_client_error() {
		return Err(AccountClientError::Rejected {
			status: status.as_u16(),
		});
	}
	Ok(resp)
}

#[async_trait]
impl AccountClient for HttpAccountClient {
	async fn update_balance(
		&self,
		account_number: &str,
		delta: f64,
	) -> Result<(), AccountClientError> {
		let url = self.account_url(&[account_number])?;
		debug!("Updating balance of {account_number} by {delta}");

		self.call(account_number, || {
			self.http_client.post(url.clone()).json(&delta)
		})
		.await?;
		Ok(())
	}

	async fn rollback_balance(
		&self,
		account_number: &str,
		delta: f64,
	) -> Result<(), AccountClientError> {
		let url = self.account_url(&[account_number, "rollback"])?;
		debug!("Rolling back {delta} on {account_number}");

		self.call(account_number, || {
			self.http_client.post(url.clone()).json(&delta)
		})
		.await?;
		Ok(())
	}

	async fn get_all_accounts(
		&self,
		page: u32,
		page_size: u32,
	) -> Result<Page<Account>, AccountClientError> {
		let url = self.account_url(&["all"])?;
		let query = [("page", page), ("size", page_size)];

		// The account service answers 404 when it holds no accounts at all.
		let resp = match self
			.call("all", || self.http_client.get(url.clone()).query(&query))
			.await
		{
			Ok(resp) => resp,
			Err(AccountClientError::NotFound { .. }) => {
				return Ok(Page::empty(page, page_size));
			}
			Err(e) => return Err(e),
		};

		let body: AccountPageResponse = resp
			.json()
			.await
			.map_err(|source| AccountClientError::Transport { source })?;

		Ok(body.into())
	}
}
