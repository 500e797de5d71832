use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::{App, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::json;

/// Mutable state behind the stubbed account service.
#[derive(Default)]
pub struct StubState {
	pub balances:    Mutex<BTreeMap<String, f64>>,
	pub requests:    Mutex<Vec<String>>,
	pub fail_status: Mutex<Option<u16>>,
}

impl StubState {
	pub fn balance(&self, account_number: &str) -> Option<f64> {
		self.balances.lock().unwrap().get(account_number).copied()
	}

	pub fn requests(&self) -> Vec<String> {
		self.requests.lock().unwrap().clone()
	}

	pub fn fail_with(&self, status: u16) {
		*self.fail_status.lock().unwrap() = Some(status);
	}
}

pub struct AccountServiceStub {
	pub url:   String,
	pub state: Arc<StubState>,
}

#[derive(Deserialize)]
struct PageQuery {
	page: usize,
	size: usize,
}

fn apply(
	state: &StubState,
	account_number: &str,
	delta: f64,
	label: &str,
) -> HttpResponse {
	state
		.requests
		.lock()
		.unwrap()
		.push(format!("{label} {account_number}"));

	if let Some(status) = *state.fail_status.lock().unwrap() {
		return HttpResponse::build(
			actix_web::http::StatusCode::from_u16(status).unwrap(),
		)
		.finish();
	}

	let mut balances = state.balances.lock().unwrap();
	match balances.get_mut(account_number) {
		Some(balance) => {
			*balance += delta;
			HttpResponse::Ok().json(json!({
				"accountNumber": account_number,
				"balance": *balance,
				"employeeId": 1
			}))
		}
		None => HttpResponse::NotFound().finish(),
	}
}

async fn update_balance(
	path: web::Path<String>,
	amount: web::Json<f64>,
	state: web::Data<Arc<StubState>>,
) -> HttpResponse {
	apply(&state, &path.into_inner(), amount.into_inner(), "update")
}

async fn rollback_balance(
	path: web::Path<String>,
	amount: web::Json<f64>,
	state: web::Data<Arc<StubState>>,
) -> HttpResponse {
	apply(&state, &path.into_inner(), -amount.into_inner(), "rollback")
}

async fn all_accounts(
	query: web::Query<PageQuery>,
	state: web::Data<Arc<StubState>>,
) -> HttpResponse {
	state
		.requests
		.lock()
		.unwrap()
		.push(format!("page {} {}", query.page, query.size));

	if let Some(status) = *state.fail_status.lock().unwrap() {
		return HttpResponse::build(
			actix_web::http::StatusCode::from_u16(status).unwrap(),
		)
		.finish();
	}

	let balances = state.balances.lock().unwrap();
	if balances.is_empty() {
		return HttpResponse::NotFound().body("No accounts found");
	}

	let total = balances.len();
	let content: Vec<_> = balances
		.iter()
		.enumerate()
		.skip(query.page * query.size)
		.take(query.size)
		.map(|(i, (account_number, balance))| {
			json!({
				"accountNumber": account_number,
				"balance": balance,
				"employeeId": i + 1
			})
		})
		.collect();
	let total_pages = total.div_ceil(query.size.max(1));

	HttpResponse::Ok().json(json!({
		"content": content,
		"number": query.page,
		"size": query.size,
		"totalElements": total,
		"totalPages": total_pages,
		"last": query.page + 1 >= total_pages
	}))
}

/// Serves the account service endpoints the ledger calls on a random local
/// port.
pub async fn start_account_service_stub(
	accounts: &[(&str, f64)],
) -> AccountServiceStub {
	let state = Arc::new(StubState::default());
	{
		let mut balances = state.balances.lock().unwrap();
		for (account_number, balance) in accounts {
			balances.insert(account_number.to_string(), *balance);
		}
	}

	let data = web::Data::new(state.clone());
	let server = HttpServer::new(move || {
		App::new()
			.app_data(data.clone())
			.service(
				web::resource("/api/account/all")
					.route(web::get().to(all_accounts)),
			)
			.service(
				web::resource("/api/account/{account_number}/rollback")
					.route(web::post().to(rollback_balance)),
			)
			.service(
				web::resource("/api/account/{account_number}")
					.route(web::post().to(update_balance)),
			)
	})
	.workers(1)
	.bind(("127.0.0.1", 0))
	.expect("Failed to bind account service stub");

	let port = server.addrs()[0].port();
	actix_web::rt::spawn(server.run());

	AccountServiceStub {
		url: format!("http://127.0.0.1:{port}"),
		state,
	}
}
