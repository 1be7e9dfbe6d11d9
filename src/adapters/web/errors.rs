use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, error};
use derive_more::derive::{Display, Error};
use log::warn;
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
	message: String,
}

/// Client-facing failures. The display text is the only detail a caller
/// ever sees; the underlying cause is logged by the handler.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
	#[display("Failed to get parcels")]
	ParcelsUnavailable,
	#[display("Failed to create parcel")]
	ParcelNotCreated,
	#[display("Failed to get parcel")]
	ParcelUnavailable,
	#[display("Failed to delete parcel")]
	ParcelNotDeleted,
	#[display("Parcel not found")]
	ParcelNotFound,
	#[display("Invalid payment amount")]
	InvalidPaymentAmount,
	#[display("Failed to create checkout session")]
	CheckoutSessionFailed,
	#[display("Request data is invalid")]
	BadClientDataError,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				message: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::ParcelsUnavailable |
			ApiError::ParcelNotCreated |
			ApiError::ParcelUnavailable |
			ApiError::ParcelNotDeleted => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::ParcelNotFound => StatusCode::NOT_FOUND,
			ApiError::InvalidPaymentAmount | ApiError::BadClientDataError => {
				StatusCode::BAD_REQUEST
			}
			ApiError::CheckoutSessionFailed => StatusCode::BAD_GATEWAY,
		}
	}
}

/// Replaces actix's plain-text extractor errors with the JSON error body.
pub fn json_error_handler(
	err: error::JsonPayloadError,
	_req: &HttpRequest,
) -> error::Error {
	warn!("Rejected request body: {err}");
	ApiError::BadClientDataError.into()
}

pub fn query_error_handler(
	err: error::QueryPayloadError,
	_req: &HttpRequest,
) -> error::Error {
	warn!("Rejected query string: {err}");
	ApiError::BadClientDataError.into()
}
