use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::parcel::{DeletedParcels, InsertedParcel, bson_to_json};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ParcelsFilter {
	pub email: Option<String>,
}

impl ParcelsFilter {
	/// A blank `email` means no filter at all.
	pub fn created_by(self) -> Option<String> {
		self.email
			.map(|email| email.trim().to_string())
			.filter(|email| !email.is_empty())
	}
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InsertOneResponse {
	pub acknowledged: bool,
	#[serde(rename = "insertedId")]
	pub inserted_id:  Value,
}

impl From<InsertedParcel> for InsertOneResponse {
	fn from(inserted: InsertedParcel) -> Self {
		Self {
			acknowledged: true,
			inserted_id:  bson_to_json(&inserted.inserted_id),
		}
	}
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DeleteResponse {
	pub acknowledged:  bool,
	#[serde(rename = "deletedCount")]
	pub deleted_count: u64,
}

impl From<DeletedParcels> for DeleteResponse {
	fn from(deleted: DeletedParcels) -> Self {
		Self {
			acknowledged:  true,
			deleted_count: deleted.deleted_count,
		}
	}
}

/// Cost may arrive as `"25"` or `25`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Cost {
	Text(String),
	Number(Number),
}

impl Cost {
	pub fn as_text(&self) -> String {
		match self {
			Cost::Text(text) => text.clone(),
			Cost::Number(number) => number.to_string(),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutSessionRequest {
	pub cost:         Cost,
	#[serde(rename = "parcelName")]
	pub parcel_name:  String,
	#[serde(rename = "parcelId")]
	pub parcel_id:    String,
	#[serde(rename = "senderEmail")]
	pub sender_email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckoutSessionResponse {
	pub url: String,
}
