use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub redis_url: String,
	pub account_service_url: String,
	pub server_keepalive: u64,
	pub server_port: u16,
	pub account_service_timeout_ms: u64,
	pub account_service_max_retries: u32,
	pub account_page_size: u32,
	pub notifications_enabled: bool,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_keepalive", 75_i64)?
			.set_default("server_port", 8083_i64)?
			.set_default("account_service_timeout_ms", 2000_i64)?
			.set_default("account_service_max_retries", 2_i64)?
			.set_default("account_page_size", 20_i64)?
			.set_default("notifications_enabled", true)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
