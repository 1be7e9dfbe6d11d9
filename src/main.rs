use std::sync::Arc;

use parcel_server::infrastructure::config::settings::Config;
use parcel_server::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	dotenvy::dotenv().ok();

	let config = Arc::new(Config::load().expect("Failed to load configuration"));
	run(config).await
}
