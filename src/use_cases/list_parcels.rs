use crate::domain::parcel::Parcel;
use crate::domain::repository::{ParcelRepository, RepositoryError};
use crate::use_cases::dto::ListParcelsQuery;

#[derive(Clone)]
pub struct ListParcelsUseCase<R: ParcelRepository> {
	parcel_repo: R,
}

impl<R: ParcelRepository> ListParcelsUseCase<R> {
	pub fn new(parcel_repo: R) -> Self {
		Self { parcel_repo }
	}

	pub async fn execute(
		&self,
		query: ListParcelsQuery,
	) -> Result<Vec<Parcel>, RepositoryError> {
		self.parcel_repo.find_all(query.created_by.as_deref()).await
	}
}
