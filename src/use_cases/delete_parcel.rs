use crate::domain::parcel::DeletedParcels;
use crate::domain::repository::{ParcelRepository, RepositoryError};

#[derive(Clone)]
pub struct DeleteParcelUseCase<R: ParcelRepository> {
	parcel_repo: R,
}

impl<R: ParcelRepository> DeleteParcelUseCase<R> {
	pub fn new(parcel_repo: R) -> Self {
		Self { parcel_repo }
	}

	/// Deleting an id that matches nothing is not an error; the result
	/// simply reports zero deletions.
	pub async fn execute(&self, id: &str) -> Result<DeletedParcels, RepositoryError> {
		self.parcel_repo.delete_by_id(id).await
	}
}
