use crate::domain::parcel::Parcel;
use crate::domain::repository::{ParcelRepository, RepositoryError};

#[derive(Clone)]
pub struct GetParcelUseCase<R: ParcelRepository> {
	parcel_repo: R,
}

impl<R: ParcelRepository> GetParcelUseCase<R> {
	pub fn new(parcel_repo: R) -> Self {
		Self { parcel_repo }
	}

	pub async fn execute(&self, id: &str) -> Result<Option<Parcel>, RepositoryError> {
		self.parcel_repo.find_by_id(id).await
	}
}
