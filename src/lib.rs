use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;
use mongodb::bson::Document;

use crate::adapters::web::errors::{json_error_handler, query_error_handler};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::payments::stripe_checkout_gateway::StripeCheckoutGateway;
use crate::infrastructure::persistence::mongo_parcel_repository::MongoParcelRepository;
use crate::use_cases::create_checkout_session::CreateCheckoutSessionUseCase;
use crate::use_cases::create_parcel::CreateParcelUseCase;
use crate::use_cases::delete_parcel::DeleteParcelUseCase;
use crate::use_cases::get_parcel::GetParcelUseCase;
use crate::use_cases::list_parcels::ListParcelsUseCase;

pub mod adapters {
	pub mod web {
		pub mod checkout_handler;
		pub mod errors;
		pub mod health_handler;
		pub mod parcels_handler;
		pub mod schema;
	}
}

pub mod domain {
	pub mod checkout;
	pub mod money;
	pub mod parcel;
	pub mod repository;
}

pub mod infrastructure {
	pub mod config {
		pub mod mongo;
		pub mod settings;
	}
	pub mod payments {
		pub mod stripe_checkout_gateway;
	}
	pub mod persistence {
		pub mod mongo_parcel_repository;
	}
}

pub mod use_cases {
	pub mod create_checkout_session;
	pub mod create_parcel;
	pub mod delete_parcel;
	pub mod dto;
	pub mod get_parcel;
	pub mod list_parcels;
}

/// Registers every route together with the JSON and query error handlers.
/// The use cases themselves are expected as app data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
		.app_data(web::QueryConfig::default().error_handler(query_error_handler))
		.service(adapters::web::health_handler::liveness)
		.service(adapters::web::parcels_handler::list_parcels)
		.service(adapters::web::parcels_handler::create_parcel)
		.service(adapters::web::parcels_handler::get_parcel)
		.service(adapters::web::parcels_handler::delete_parcel)
		.service(adapters::web::checkout_handler::create_checkout_session);
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	let database =
		infrastructure::config::mongo::connect(&config.database_url, &config.database_name)
			.await
			.map_err(std::io::Error::other)?;
	let parcel_repository = MongoParcelRepository::new(
		database.collection::<Document>(&config.parcels_collection),
	);

	let checkout_gateway = StripeCheckoutGateway::new(
		reqwest::Client::new(),
		config.payment_gateway_url.clone(),
		config.payment_gateway_key.clone(),
	);

	let list_parcels_use_case = ListParcelsUseCase::new(parcel_repository.clone());
	let create_parcel_use_case = CreateParcelUseCase::new(parcel_repository.clone());
	let get_parcel_use_case = GetParcelUseCase::new(parcel_repository.clone());
	let delete_parcel_use_case = DeleteParcelUseCase::new(parcel_repository);
	let create_checkout_session_use_case =
		CreateCheckoutSessionUseCase::new(checkout_gateway, config.site_domain.clone());

	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(Logger::default())
			.app_data(web::Data::new(list_parcels_use_case.clone()))
			.app_data(web::Data::new(create_parcel_use_case.clone()))
			.app_data(web::Data::new(get_parcel_use_case.clone()))
			.app_data(web::Data::new(delete_parcel_use_case.clone()))
			.app_data(web::Data::new(create_checkout_session_use_case.clone()))
			.configure(configure_routes)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.port))?
	.run()
	.await
}
