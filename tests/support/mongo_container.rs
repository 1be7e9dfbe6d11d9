use mongodb::Database;
use mongodb::bson::Document;
use parcel_server::infrastructure::config::mongo::connect;
use parcel_server::infrastructure::persistence::mongo_parcel_repository::MongoParcelRepository;
use testcontainers::GenericImage;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;

pub const TEST_DATABASE_NAME: &str = "parcelDB";
pub const TEST_COLLECTION_NAME: &str = "parcels";

pub struct MongoTestContainer {
	pub database:  Database,
	pub container: testcontainers::ContainerAsync<GenericImage>,
}

impl MongoTestContainer {
	pub fn parcel_repository(&self) -> MongoParcelRepository {
		MongoParcelRepository::new(
			self.database.collection::<Document>(TEST_COLLECTION_NAME),
		)
	}
}

pub async fn get_test_mongo_database() -> MongoTestContainer {
	let container = GenericImage::new("mongo", "8.0")
		.with_exposed_port(ContainerPort::Tcp(27017))
		.with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
		.start()
		.await
		.unwrap();
	let host_port = container.get_host_port_ipv4(27017).await;
	let database_url = format!(
		"mongodb://127.0.0.1:{}/?directConnection=true&serverSelectionTimeoutMS=2000",
		host_port.unwrap()
	);

	let database = connect(&database_url, TEST_DATABASE_NAME)
		.await
		.expect("Failed to connect to MongoDB");
	// Start every test from an empty collection
	database
		.collection::<Document>(TEST_COLLECTION_NAME)
		.drop()
		.await
		.expect("Failed to clear parcels collection");

	MongoTestContainer {
		database,
		container,
	}
}
