use log::info;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};

/// Connects with the stable server API (v1, strict) and pings the
/// deployment before handing out the application database.
pub async fn connect(
	database_url: &str,
	database_name: &str,
) -> mongodb::error::Result<Database> {
	let mut options = ClientOptions::parse(database_url).await?;
	options.server_api = Some(
		ServerApi::builder()
			.version(ServerApiVersion::V1)
			.strict(true)
			.deprecation_errors(true)
			.build(),
	);

	let client = Client::with_options(options)?;
	client.database("admin").run_command(doc! { "ping": 1 }).await?;
	info!("Pinged MongoDB deployment, connection established");

	Ok(client.database(database_name))
}
