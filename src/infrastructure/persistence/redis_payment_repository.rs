use std::collections::HashMap;
use std::error::Error;

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::payment::{NewPayment, Payment};
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::config::redis::{
	PAYMENT_ID_SEQUENCE_KEY, PAYMENTS_INDEX_KEY, account_payments_key,
	payment_key,
};

/// Payments live in one hash per id. Two lists index them: every id in
/// insertion order, and the ids of each account.
#[derive(Clone)]
pub struct RedisPaymentRepository {
	client: Client,
}

impl RedisPaymentRepository {
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	async fn load(
		&self,
		con: &mut redis::aio::MultiplexedConnection,
		index_key: &str,
	) -> Result<Vec<Payment>, Box<dyn Error + Send>> {
		let ids: Vec<u64> = con.lrange(index_key, 0, -1).await.map_err(boxed)?;

		if ids.is_empty() {
			return Ok(Vec::new());
		}

		let mut pipe = redis::pipe();
		for id in &ids {
			pipe.hgetall(payment_key(*id));
		}
		let rows: Vec<HashMap<String, String>> =
			pipe.query_async(con).await.map_err(boxed)?;

		ids.into_iter()
			.zip(rows)
			.map(|(id, row)| parse_payment(id, &row))
			.collect()
	}
}

fn boxed<E: Error + Send + 'static>(e: E) -> Box<dyn Error + Send> {
	Box::new(e)
}

fn corrupt(id: u64, field: &str) -> Box<dyn Error + Send> {
	boxed(std::io::Error::new(
		std::io::ErrorKind::InvalidData,
		format!("Payment {id} has a missing or malformed '{field}'"),
	))
}

fn parse_payment(
	id: u64,
	row: &HashMap<String, String>,
) -> Result<Payment, Box<dyn Error + Send>> {
	let account_number = row
		.get("account_number")
		.cloned()
		.ok_or_else(|| corrupt(id, "account_number"))?;
	let amount = row
		.get("amount")
		.and_then(|s| s.parse::<f64>().ok())
		.ok_or_else(|| corrupt(id, "amount"))?;
	let timestamp = row
		.get("timestamp")
		.and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
		.ok_or_else(|| corrupt(id, "timestamp"))?;

	Ok(Payment {
		id,
		account_number,
		amount,
		timestamp,
	})
}

#[async_trait]
impl PaymentRepository for RedisPaymentRepository {
	async fn save(
		&self,
		payment: NewPayment,
	) -> Result<Payment, Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		let id: u64 = con
			.incr(PAYMENT_ID_SEQUENCE_KEY, 1_u64)
			.await
			.map_err(boxed)?;
		let payment = payment.with_id(id);
		let timestamp = payment.timestamp.format(&Rfc3339).map_err(boxed)?;

		redis::pipe()
			.atomic()
			.hset_multiple(payment_key(id), &[
				("account_number", payment.account_number.clone()),
				("amount", payment.amount.to_string()),
				("timestamp", timestamp),
			])
			.ignore()
			.rpush(PAYMENTS_INDEX_KEY, id)
			.ignore()
			.rpush(account_payments_key(&payment.account_number), id)
			.ignore()
			.query_async::<()>(&mut con)
			.await
			.map_err(boxed)?;

		log::debug!("Stored payment under key {}", payment_key(id));

		Ok(payment)
	}

	async fn find_by_account_number(
		&self,
		account_number: &str,
	) -> Result<Vec<Payment>, Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		self.load(&mut con, &account_payments_key(account_number))
			.await
	}

	async fn find_all(&self) -> Result<Vec<Payment>, Box<dyn Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(boxed)?;

		self.load(&mut con, PAYMENTS_INDEX_KEY).await
	}
}
