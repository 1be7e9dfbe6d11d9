use actix_web::{HttpResponse, Responder, get};

pub const LIVENESS_MESSAGE: &str = "Parcel Server is running";

#[get("/")]
pub async fn liveness() -> impl Responder {
	HttpResponse::Ok().content_type("text/plain").body(LIVENESS_MESSAGE)
}
