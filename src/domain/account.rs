use serde::{Deserialize, Serialize};

/// Read-only projection of an account owned by the account service.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
	pub account_number: String,
	pub balance:        f64,
	pub employee_id:    i64,
}

/// A bounded slice of a larger result set.
///
/// Callers keep fetching while `has_next` is true and must not infer the end
/// from the content length.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
	pub content:        Vec<T>,
	pub page:           u32,
	pub size:           u32,
	pub total_elements: u64,
	pub has_next:       bool,
}

impl<T> Page<T> {
	pub fn empty(page: u32, size: u32) -> Self {
		Self {
			content: Vec::new(),
			page,
			size,
			total_elements: 0,
			has_next: false,
		}
	}
}
