use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{error, info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{CheckoutSessionRequest, CheckoutSessionResponse};
use crate::domain::checkout::CheckoutError;
use crate::infrastructure::payments::stripe_checkout_gateway::StripeCheckoutGateway;
use crate::use_cases::create_checkout_session::CreateCheckoutSessionUseCase;
use crate::use_cases::dto::CreateCheckoutSessionCommand;

#[post("/payment-checkout-session")]
pub async fn create_checkout_session(
	payload: web::Json<CheckoutSessionRequest>,
	create_checkout_session_use_case: web::Data<
		CreateCheckoutSessionUseCase<StripeCheckoutGateway>,
	>,
) -> impl Responder {
	let payload = payload.into_inner();
	let command = CreateCheckoutSessionCommand {
		cost:         payload.cost.as_text(),
		parcel_name:  payload.parcel_name,
		parcel_id:    payload.parcel_id,
		sender_email: payload.sender_email,
	};
	let parcel_id = command.parcel_id.clone();

	match create_checkout_session_use_case.execute(command).await {
		Ok(session) => {
			info!("Checkout session {} created for parcel {parcel_id}", session.id);
			HttpResponse::Ok().json(CheckoutSessionResponse { url: session.url })
		}
		Err(e @ CheckoutError::InvalidAmount(_)) => {
			warn!("Refusing checkout session for parcel {parcel_id}: {e}");
			ApiError::InvalidPaymentAmount.error_response()
		}
		Err(e) => {
			error!("Error creating checkout session for parcel {parcel_id}: {e}");
			ApiError::CheckoutSessionFailed.error_response()
		}
	}
}
