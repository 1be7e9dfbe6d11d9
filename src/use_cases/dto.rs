use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ListParcelsQuery {
	pub created_by: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateCheckoutSessionCommand {
	pub cost:         String,
	pub parcel_name:  String,
	pub parcel_id:    String,
	pub sender_email: String,
}
