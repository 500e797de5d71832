use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

use crate::use_cases::errors::PaymentError;

#[derive(Serialize)]
struct ErrorResponse {
	#[serde(rename = "statusCode")]
	status_code: u16,
	error:       String,
	message:     String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Request data is invalid: {reason}")]
	BadClientDataError { reason: String },
	#[display("Transaction failed, rolling back changes.")]
	TransactionError,
	#[display(
		"Transaction failed, rolling back changes. Account {account_number} was \
		 not found."
	)]
	AccountNotFoundError { account_number: String },
	#[display("Bulk payment aborted after {processed} payments.")]
	BatchAbortedError { processed: usize },
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::BadClientDataError { .. } => "Bad request".to_string(),
			ApiError::AccountNotFoundError { .. } => "Not Found".to_string(),
			ApiError::TransactionError => "Unprocessable Entity".to_string(),
			ApiError::BatchAbortedError { .. } => "Bad Gateway".to_string(),
			ApiError::InternalServerError => "Internal Server Error".to_string(),
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				status_code: self.status_code().as_u16(),
				error:       self.to_string(),
				message:     self.name(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError { .. } => StatusCode::BAD_REQUEST,
			ApiError::AccountNotFoundError { .. } => StatusCode::NOT_FOUND,
			ApiError::TransactionError => StatusCode::UNPROCESSABLE_ENTITY,
			ApiError::BatchAbortedError { .. } => StatusCode::BAD_GATEWAY,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<PaymentError> for ApiError {
	fn from(err: PaymentError) -> Self {
		match err {
			PaymentError::Validation { reason } => {
				ApiError::BadClientDataError { reason }
			}
			PaymentError::AccountNotFound { account_number } => {
				ApiError::AccountNotFoundError { account_number }
			}
			PaymentError::TransactionFailed { source } => match *source {
				PaymentError::AccountNotFound { account_number } => {
					ApiError::AccountNotFoundError { account_number }
				}
				_ => ApiError::TransactionError,
			},
			PaymentError::BatchAborted { processed, .. } => {
				ApiError::BatchAbortedError { processed }
			}
			// Remote and publish failures only surface wrapped by a saga.
			PaymentError::RemoteCall { .. } |
			PaymentError::Publish { .. } |
			PaymentError::Unexpected { .. } => ApiError::InternalServerError,
		}
	}
}
