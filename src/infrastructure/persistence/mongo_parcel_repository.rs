use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::Collection;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};

use crate::domain::parcel::{
	CREATED_AT_FIELD, CREATED_BY_FIELD, DeletedParcels, ID_FIELD,
	InsertedParcel, Parcel,
};
use crate::domain::repository::{ParcelRepository, RepositoryError};

#[derive(Clone)]
pub struct MongoParcelRepository {
	collection: Collection<Document>,
}

impl MongoParcelRepository {
	pub fn new(collection: Collection<Document>) -> Self {
		Self { collection }
	}

	fn id_filter(id: &str) -> Result<Document, RepositoryError> {
		let oid = ObjectId::parse_str(id)
			.map_err(|e| RepositoryError::MalformedId(format!("{id}: {e}")))?;
		Ok(doc! { ID_FIELD: oid })
	}
}

fn store_error(e: mongodb::error::Error) -> RepositoryError {
	RepositoryError::Store(e.to_string())
}

#[async_trait]
impl ParcelRepository for MongoParcelRepository {
	async fn find_all(
		&self,
		created_by: Option<&str>,
	) -> Result<Vec<Parcel>, RepositoryError> {
		let filter = match created_by {
			Some(email) => doc! { CREATED_BY_FIELD: email },
			None => doc! {},
		};
		debug!("Finding parcels matching {filter}");

		let documents: Vec<Document> = self
			.collection
			.find(filter)
			.sort(doc! { CREATED_AT_FIELD: -1 })
			.await
			.map_err(store_error)?
			.try_collect()
			.await
			.map_err(store_error)?;

		Ok(documents.into_iter().map(Parcel::from_document).collect())
	}

	async fn insert(&self, parcel: Parcel) -> Result<InsertedParcel, RepositoryError> {
		let result = self
			.collection
			.insert_one(parcel.into_document())
			.await
			.map_err(store_error)?;

		Ok(InsertedParcel {
			inserted_id: result.inserted_id,
		})
	}

	async fn find_by_id(&self, id: &str) -> Result<Option<Parcel>, RepositoryError> {
		let filter = Self::id_filter(id)?;
		let document = self.collection.find_one(filter).await.map_err(store_error)?;

		Ok(document.map(Parcel::from_document))
	}

	async fn delete_by_id(&self, id: &str) -> Result<DeletedParcels, RepositoryError> {
		let filter = Self::id_filter(id)?;
		let result = self.collection.delete_one(filter).await.map_err(store_error)?;

		Ok(DeletedParcels {
			deleted_count: result.deleted_count,
		})
	}
}
