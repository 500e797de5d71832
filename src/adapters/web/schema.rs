use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
	pub account_number: String,
	pub amount:         f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BulkPaymentRequest {
	pub amount: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HealthResponse {
	pub status: String,
}
