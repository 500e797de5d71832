pub const PAYMENT_QUEUE_KEY: &str = "payment-queue";
pub const PAYMENT_ID_SEQUENCE_KEY: &str = "payment:id_seq";
pub const PAYMENTS_INDEX_KEY: &str = "payments";

pub fn payment_key(id: u64) -> String {
	format!("payment:{id}")
}

pub fn account_payments_key(account_number: &str) -> String {
	format!("payments:account:{account_number}")
}
