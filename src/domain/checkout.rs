use async_trait::async_trait;
use derive_more::derive::{Display, Error};

pub const CHECKOUT_CURRENCY: &str = "usd";
pub const CHECKOUT_MODE: &str = "payment";

/// A single-item hosted checkout, ready to hand to a payment provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOrder {
	pub unit_amount:    i64,
	pub currency:       String,
	pub quantity:       u32,
	pub product_name:   String,
	pub parcel_id:      String,
	pub customer_email: String,
	pub success_url:    String,
	pub cancel_url:     String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
	pub id:  String,
	pub url: String,
}

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum CheckoutError {
	#[display("Invalid payment amount: {_0}")]
	InvalidAmount(#[error(not(source))] String),
	#[display("Payment provider unreachable: {_0}")]
	Transport(#[error(not(source))] String),
	#[display("Payment provider rejected the session ({status}): {message}")]
	Rejected { status: u16, message: String },
	#[display("Payment provider returned a session without a URL")]
	MissingUrl,
}

#[async_trait]
pub trait CheckoutGateway: Send + Sync + 'static {
	async fn create_session(
		&self,
		order: &CheckoutOrder,
	) -> Result<CheckoutSession, CheckoutError>;
}
