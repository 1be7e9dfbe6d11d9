use mongodb::bson::{Bson, DateTime, Document};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::domain::repository::RepositoryError;

pub const CREATED_BY_FIELD: &str = "created_by";
pub const CREATED_AT_FIELD: &str = "createdAt";
pub const ID_FIELD: &str = "_id";

/// A parcel record as stored in the document store.
///
/// Apart from `created_by` and `createdAt` the document is opaque and is
/// returned exactly as it was stored, plus the store-assigned `_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcel(Document);

impl Parcel {
	pub fn from_document(document: Document) -> Self {
		Self(document)
	}

	pub fn from_json(fields: Map<String, Value>) -> Result<Self, RepositoryError> {
		mongodb::bson::to_document(&fields)
			.map(Self)
			.map_err(|e| RepositoryError::Store(e.to_string()))
	}

	pub fn id(&self) -> Option<&Bson> {
		self.0.get(ID_FIELD)
	}

	pub fn created_by(&self) -> Option<&str> {
		self.0.get_str(CREATED_BY_FIELD).ok()
	}

	pub fn document(&self) -> &Document {
		&self.0
	}

	pub fn into_document(self) -> Document {
		self.0
	}

	pub fn to_json(&self) -> Value {
		document_to_json(&self.0)
	}
}

impl Serialize for Parcel {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.to_json().serialize(serializer)
	}
}

/// Acknowledgment of a single insert.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedParcel {
	pub inserted_id: Bson,
}

/// Acknowledgment of a delete by id; `deleted_count` is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedParcels {
	pub deleted_count: u64,
}

/// Renders a BSON value the way clients expect to read it: object ids as
/// their hex string and dates as RFC 3339 strings.
pub fn bson_to_json(value: &Bson) -> Value {
	match value {
		Bson::ObjectId(oid) => Value::String(oid.to_hex()),
		Bson::DateTime(dt) => iso_millis_string(*dt)
			.map(Value::String)
			.unwrap_or_else(|| Value::from(dt.timestamp_millis())),
		Bson::Document(doc) => document_to_json(doc),
		Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
		Bson::String(s) => Value::String(s.clone()),
		Bson::Boolean(b) => Value::Bool(*b),
		Bson::Int32(n) => Value::from(*n),
		Bson::Int64(n) => Value::from(*n),
		Bson::Double(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
		Bson::Null | Bson::Undefined => Value::Null,
		other => other.clone().into_relaxed_extjson(),
	}
}

/// `YYYY-MM-DDTHH:MM:SS.sssZ`, always with three millisecond digits.
fn iso_millis_string(dt: DateTime) -> Option<String> {
	let millis = dt.timestamp_millis();
	let fraction = millis.rem_euclid(1000);
	let whole_seconds = DateTime::from_millis(millis - fraction)
		.try_to_rfc3339_string()
		.ok()?;
	let without_zone = whole_seconds.strip_suffix('Z')?;
	Some(format!("{without_zone}.{fraction:03}Z"))
}

fn document_to_json(document: &Document) -> Value {
	Value::Object(
		document
			.iter()
			.map(|(key, value)| (key.clone(), bson_to_json(value)))
			.collect(),
	)
}
