use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

pub mod domain {
	pub mod account;
	pub mod account_client;
	pub mod notification;
	pub mod payment;
	pub mod queue;
	pub mod repository;
}

pub mod use_cases {
	pub mod create_payment;
	pub mod create_payments_for_all;
	pub mod dto;
	pub mod errors;
	pub mod get_all_payments;
	pub mod get_payments_by_account;
	pub mod notify_payment;
}

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod health_handler;
		pub mod payments_handler;
		pub mod payments_query_handler;
		pub mod schema;
	}
}

pub mod infrastructure {
	pub mod config {
		pub mod redis;
		pub mod settings;
	}
	pub mod clients {
		pub mod http_account_client;
	}
	pub mod notification {
		pub mod log_notification_sender;
	}
	pub mod persistence {
		pub mod in_memory_payment_repository;
		pub mod redis_payment_repository;
	}
	pub mod queue {
		pub mod in_memory_queue;
		pub mod redis_payment_queue;
	}
	pub mod workers {
		pub mod notification_worker;
	}
}

use crate::adapters::web::health_handler::health;
use crate::adapters::web::payments_handler::{
	create_payment, create_payments_for_all,
};
use crate::adapters::web::payments_query_handler::{
	get_all_payments, get_payments_by_account,
};
use crate::domain::account_client::AccountClient;
use crate::domain::payment::PaymentRequest;
use crate::domain::queue::Queue;
use crate::domain::repository::PaymentRepository;
use crate::infrastructure::clients::http_account_client::HttpAccountClient;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::notification::log_notification_sender::LogNotificationSender;
use crate::infrastructure::persistence::redis_payment_repository::RedisPaymentRepository;
use crate::infrastructure::queue::redis_payment_queue::RedisPaymentQueue;
use crate::infrastructure::workers::notification_worker::notification_worker;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::create_payments_for_all::CreatePaymentsForAllUseCase;
use crate::use_cases::get_all_payments::GetAllPaymentsUseCase;
use crate::use_cases::get_payments_by_account::GetPaymentsByAccountUseCase;
use crate::use_cases::notify_payment::NotifyPaymentUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let redis_client = redis::Client::open(config.redis_url.clone())
		.map_err(std::io::Error::other)?;

	let http_client = Client::builder()
		.timeout(Duration::from_millis(config.account_service_timeout_ms))
		.build()
		.map_err(std::io::Error::other)?;

	let payment_repo: Arc<dyn PaymentRepository> =
		Arc::new(RedisPaymentRepository::new(redis_client.clone()));
	let payment_queue: Arc<dyn Queue<PaymentRequest>> =
		Arc::new(RedisPaymentQueue::new(redis_client.clone()));
	let account_client: Arc<dyn AccountClient> = Arc::new(HttpAccountClient::new(
		http_client,
		&config.account_service_url,
		config.account_service_max_retries,
		HttpAccountClient::default_breaker(),
	));

	let create_payment_use_case = CreatePaymentUseCase::new(
		payment_repo.clone(),
		account_client.clone(),
		payment_queue.clone(),
	);
	let create_payments_for_all_use_case = CreatePaymentsForAllUseCase::new(
		payment_repo.clone(),
		account_client.clone(),
		payment_queue.clone(),
	)
	.with_page_size(config.account_page_size);
	let get_all_payments_use_case = GetAllPaymentsUseCase::new(payment_repo.clone());
	let get_payments_by_account_use_case =
		GetPaymentsByAccountUseCase::new(payment_repo.clone());

	if config.notifications_enabled {
		info!("Starting notification worker...");
		let notify_payment_use_case =
			NotifyPaymentUseCase::new(Arc::new(LogNotificationSender));
		tokio::spawn(notification_worker(
			payment_queue.clone(),
			notify_payment_use_case,
		));
	}

	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.server_port);
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(create_payments_for_all_use_case.clone()))
			.app_data(web::Data::new(get_all_payments_use_case.clone()))
			.app_data(web::Data::new(get_payments_by_account_use_case.clone()))
			.service(health)
			.service(create_payments_for_all)
			.service(create_payment)
			.service(get_all_payments)
			.service(get_payments_by_account)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.server_port))?
	.run()
	.await
}
