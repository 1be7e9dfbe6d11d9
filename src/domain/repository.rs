use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::parcel::{DeletedParcels, InsertedParcel, Parcel};

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum RepositoryError {
	#[display("Malformed parcel id: {_0}")]
	MalformedId(#[error(not(source))] String),
	#[display("Parcel store failure: {_0}")]
	Store(#[error(not(source))] String),
}

#[async_trait]
pub trait ParcelRepository: Send + Sync + 'static {
	/// Every parcel, or only those whose `created_by` equals `created_by`,
	/// newest `createdAt` first.
	async fn find_all(
		&self,
		created_by: Option<&str>,
	) -> Result<Vec<Parcel>, RepositoryError>;
	async fn insert(&self, parcel: Parcel) -> Result<InsertedParcel, RepositoryError>;
	async fn find_by_id(&self, id: &str) -> Result<Option<Parcel>, RepositoryError>;
	async fn delete_by_id(&self, id: &str) -> Result<DeletedParcels, RepositoryError>;
}
