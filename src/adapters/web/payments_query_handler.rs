use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use log::error;

use crate::adapters::web::errors::ApiError;
use crate::use_cases::get_all_payments::GetAllPaymentsUseCase;
use crate::use_cases::get_payments_by_account::GetPaymentsByAccountUseCase;

#[get("/api/payment")]
pub async fn get_all_payments(
	get_all_payments_use_case: web::Data<GetAllPaymentsUseCase>,
) -> impl Responder {
	match get_all_payments_use_case.execute().await {
		Ok(payments) => HttpResponse::Ok().json(payments),
		Err(e) => {
			error!("Error listing payments: {e}");
			ApiError::from(e).error_response()
		}
	}
}

#[get("/api/payment/{account_number}")]
pub async fn get_payments_by_account(
	path: web::Path<String>,
	get_payments_by_account_use_case: web::Data<GetPaymentsByAccountUseCase>,
) -> impl Responder {
	let account_number = path.into_inner();

	match get_payments_by_account_use_case
		.execute(&account_number)
		.await
	{
		Ok(payments) => HttpResponse::Ok().json(payments),
		Err(e) => {
			error!("Error listing payments for {account_number}: {e}");
			ApiError::from(e).error_response()
		}
	}
}
