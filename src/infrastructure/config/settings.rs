use serde::Deserialize;

pub const DEFAULT_DATABASE_NAME: &str = "parcelDB";
pub const DEFAULT_PARCELS_COLLECTION: &str = "parcels";
pub const DEFAULT_PAYMENT_GATEWAY_URL: &str = "https://api.stripe.com";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SERVER_KEEPALIVE: u64 = 75;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub database_url:        String,
	pub database_name:       String,
	pub parcels_collection:  String,
	pub payment_gateway_key: String,
	pub payment_gateway_url: String,
	pub site_domain:         String,
	pub port:                u16,
	pub server_keepalive:    u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::from_environment(config::Environment::with_prefix("APP"))
	}

	fn from_environment(
		environment: config::Environment,
	) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("database_name", DEFAULT_DATABASE_NAME)?
			.set_default("parcels_collection", DEFAULT_PARCELS_COLLECTION)?
			.set_default("payment_gateway_url", DEFAULT_PAYMENT_GATEWAY_URL)?
			.set_default("port", i64::from(DEFAULT_PORT))?
			.set_default("server_keepalive", DEFAULT_SERVER_KEEPALIVE as i64)?
			.add_source(environment)
			.build()?;

		config_builder.try_deserialize()
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	fn environment(vars: &[(&str, &str)]) -> config::Environment {
		let source: HashMap<String, String> = vars
			.iter()
			.map(|(key, value)| (key.to_string(), value.to_string()))
			.collect();
		config::Environment::with_prefix("APP").source(Some(source))
	}

	#[test]
	fn test_config_load() {
		let config = Config::from_environment(environment(&[
			("APP_DATABASE_URL", "mongodb://test_mongo:27017/"),
			("APP_DATABASE_NAME", "testDB"),
			("APP_PARCELS_COLLECTION", "test_parcels"),
			("APP_PAYMENT_GATEWAY_KEY", "sk_test_123"),
			("APP_PAYMENT_GATEWAY_URL", "http://test_stripe/"),
			("APP_SITE_DOMAIN", "http://test_site"),
			("APP_PORT", "8080"),
			("APP_SERVER_KEEPALIVE", "120"),
		]))
		.expect("Failed to load config in test");

		assert_eq!(config.database_url, "mongodb://test_mongo:27017/");
		assert_eq!(config.database_name, "testDB");
		assert_eq!(config.parcels_collection, "test_parcels");
		assert_eq!(config.payment_gateway_key, "sk_test_123");
		assert_eq!(config.payment_gateway_url, "http://test_stripe/");
		assert_eq!(config.site_domain, "http://test_site");
		assert_eq!(config.port, 8080);
		assert_eq!(config.server_keepalive, 120);
	}

	#[test]
	fn test_config_load_with_defaults() {
		let config = Config::from_environment(environment(&[
			("APP_DATABASE_URL", "mongodb://test_mongo:27017/"),
			("APP_PAYMENT_GATEWAY_KEY", "sk_test_123"),
			("APP_SITE_DOMAIN", "http://test_site"),
		]))
		.expect("Failed to load config in test");

		assert_eq!(config.database_name, DEFAULT_DATABASE_NAME);
		assert_eq!(config.parcels_collection, DEFAULT_PARCELS_COLLECTION);
		assert_eq!(config.payment_gateway_url, DEFAULT_PAYMENT_GATEWAY_URL);
		assert_eq!(config.port, DEFAULT_PORT);
		assert_eq!(config.server_keepalive, DEFAULT_SERVER_KEEPALIVE);
	}

	#[test]
	fn test_config_load_without_payment_key_fails() {
		let result = Config::from_environment(environment(&[
			("APP_DATABASE_URL", "mongodb://test_mongo:27017/"),
			("APP_SITE_DOMAIN", "http://test_site"),
		]));

		assert!(result.is_err());
	}
}
