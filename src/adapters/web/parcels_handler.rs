use actix_web::{HttpResponse, Responder, ResponseError, delete, get, post, web};
use log::{error, info};
use serde_json::{Map, Value};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{DeleteResponse, InsertOneResponse, ParcelsFilter};
use crate::infrastructure::persistence::mongo_parcel_repository::MongoParcelRepository;
use crate::use_cases::create_parcel::CreateParcelUseCase;
use crate::use_cases::delete_parcel::DeleteParcelUseCase;
use crate::use_cases::dto::ListParcelsQuery;
use crate::use_cases::get_parcel::GetParcelUseCase;
use crate::use_cases::list_parcels::ListParcelsUseCase;

#[get("/parcels")]
pub async fn list_parcels(
	filter: web::Query<ParcelsFilter>,
	list_parcels_use_case: web::Data<ListParcelsUseCase<MongoParcelRepository>>,
) -> impl Responder {
	let query = ListParcelsQuery {
		created_by: filter.into_inner().created_by(),
	};

	match list_parcels_use_case.execute(query).await {
		Ok(parcels) => HttpResponse::Ok().json(parcels),
		Err(e) => {
			error!("Error fetching parcels: {e}");
			ApiError::ParcelsUnavailable.error_response()
		}
	}
}

#[post("/parcels")]
pub async fn create_parcel(
	payload: web::Json<Map<String, Value>>,
	create_parcel_use_case: web::Data<CreateParcelUseCase<MongoParcelRepository>>,
) -> impl Responder {
	match create_parcel_use_case.execute(payload.into_inner()).await {
		Ok(inserted) => {
			let response = InsertOneResponse::from(inserted);
			info!("Parcel created: {}", response.inserted_id);
			HttpResponse::Created().json(response)
		}
		Err(e) => {
			error!("Error inserting parcel: {e}");
			ApiError::ParcelNotCreated.error_response()
		}
	}
}

#[get("/parcels/{id}")]
pub async fn get_parcel(
	id: web::Path<String>,
	get_parcel_use_case: web::Data<GetParcelUseCase<MongoParcelRepository>>,
) -> impl Responder {
	match get_parcel_use_case.execute(&id).await {
		Ok(Some(parcel)) => HttpResponse::Ok().json(parcel),
		Ok(None) => ApiError::ParcelNotFound.error_response(),
		Err(e) => {
			error!("Error fetching parcel {id}: {e}");
			ApiError::ParcelUnavailable.error_response()
		}
	}
}

#[delete("/parcels/{id}")]
pub async fn delete_parcel(
	id: web::Path<String>,
	delete_parcel_use_case: web::Data<DeleteParcelUseCase<MongoParcelRepository>>,
) -> impl Responder {
	match delete_parcel_use_case.execute(&id).await {
		Ok(deleted) => {
			info!("Deleted {} parcel(s) with id {id}", deleted.deleted_count);
			HttpResponse::Ok().json(DeleteResponse::from(deleted))
		}
		Err(e) => {
			error!("Error deleting parcel {id}: {e}");
			ApiError::ParcelNotDeleted.error_response()
		}
	}
}
