use serde_json::{Map, Value};

use crate::domain::parcel::{InsertedParcel, Parcel};
use crate::domain::repository::{ParcelRepository, RepositoryError};

#[derive(Clone)]
pub struct CreateParcelUseCase<R: ParcelRepository> {
	parcel_repo: R,
}

impl<R: ParcelRepository> CreateParcelUseCase<R> {
	pub fn new(parcel_repo: R) -> Self {
		Self { parcel_repo }
	}

	/// Stores the caller's document as given; the store mints the `_id`.
	pub async fn execute(
		&self,
		fields: Map<String, Value>,
	) -> Result<InsertedParcel, RepositoryError> {
		let parcel = Parcel::from_json(fields)?;
		self.parcel_repo.insert(parcel).await
	}
}
