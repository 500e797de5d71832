use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{BulkPaymentRequest, PaymentRequest};
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::create_payments_for_all::CreatePaymentsForAllUseCase;
use crate::use_cases::dto::{CreateBulkPaymentCommand, CreatePaymentCommand};

#[post("/api/payment")]
pub async fn create_payment(
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<CreatePaymentUseCase>,
) -> impl Responder {
	let command = CreatePaymentCommand {
		account_number: payload.account_number.clone(),
		amount:         payload.amount,
	};

	match create_payment_use_case.execute(command).await {
		Ok(payment) => {
			info!(
				"Payment {} created for account {}",
				payment.id, payment.account_number
			);
			HttpResponse::Created().json(payment)
		}
		Err(e) => {
			warn!("Error creating payment for {}: {e}", payload.account_number);
			ApiError::from(e).error_response()
		}
	}
}

#[post("/api/payment/all")]
pub async fn create_payments_for_all(
	payload: web::Json<BulkPaymentRequest>,
	create_payments_for_all_use_case: web::Data<CreatePaymentsForAllUseCase>,
) -> impl Responder {
	let command = CreateBulkPaymentCommand {
		amount: payload.amount,
	};

	match create_payments_for_all_use_case.execute(command).await {
		Ok(responses) => HttpResponse::Created().json(responses),
		Err(e) => {
			warn!("Error creating bulk payment: {e}");
			ApiError::from(e).error_response()
		}
	}
}
