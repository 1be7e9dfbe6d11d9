use crate::domain::checkout::{
	CHECKOUT_CURRENCY, CheckoutError, CheckoutGateway, CheckoutOrder,
	CheckoutSession,
};
use crate::domain::money::to_minor_units;
use crate::use_cases::dto::CreateCheckoutSessionCommand;

/// The provider substitutes the real session id for this placeholder.
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

#[derive(Clone)]
pub struct CreateCheckoutSessionUseCase<G: CheckoutGateway> {
	gateway:     G,
	site_domain: String,
}

impl<G: CheckoutGateway> CreateCheckoutSessionUseCase<G> {
	pub fn new(gateway: G, site_domain: String) -> Self {
		Self {
			gateway,
			site_domain: site_domain.trim_end_matches('/').to_string(),
		}
	}

	pub fn order_for(
		&self,
		command: CreateCheckoutSessionCommand,
	) -> Result<CheckoutOrder, CheckoutError> {
		Ok(CheckoutOrder {
			unit_amount:    to_minor_units(&command.cost)?,
			currency:       CHECKOUT_CURRENCY.to_string(),
			quantity:       1,
			product_name:   format!("Please pay for: {}", command.parcel_name),
			parcel_id:      command.parcel_id,
			customer_email: command.sender_email,
			success_url:    format!(
				"{}/dashboard/payment-success?session_id={SESSION_ID_PLACEHOLDER}",
				self.site_domain
			),
			cancel_url:     format!(
				"{}/dashboard/payment-cancelled",
				self.site_domain
			),
		})
	}

	pub async fn execute(
		&self,
		command: CreateCheckoutSessionCommand,
	) -> Result<CheckoutSession, CheckoutError> {
		let order = self.order_for(command)?;
		self.gateway.create_session(&order).await
	}
}
