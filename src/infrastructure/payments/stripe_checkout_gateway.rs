use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::checkout::{
	CHECKOUT_MODE, CheckoutError, CheckoutGateway, CheckoutOrder, CheckoutSession,
};

const CHECKOUT_SESSIONS_PATH: &str = "/v1/checkout/sessions";

#[derive(Debug, Deserialize)]
struct StripeCheckoutSession {
	id:  String,
	url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
	error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
	#[serde(default)]
	message: Option<String>,
}

/// Creates hosted Checkout sessions through the Stripe REST API.
#[derive(Clone)]
pub struct StripeCheckoutGateway {
	http_client: Client,
	api_url:     String,
	secret_key:  String,
}

impl StripeCheckoutGateway {
	pub fn new(http_client: Client, api_url: String, secret_key: String) -> Self {
		Self {
			http_client,
			api_url: api_url.trim_end_matches('/').to_string(),
			secret_key,
		}
	}

	/// Form fields in Stripe's bracketed notation for a one-item session.
	pub fn session_form(order: &CheckoutOrder) -> Vec<(&'static str, String)> {
		vec![
			(
				"line_items[0][price_data][currency]",
				order.currency.clone(),
			),
			(
				"line_items[0][price_data][unit_amount]",
				order.unit_amount.to_string(),
			),
			(
				"line_items[0][price_data][product_data][name]",
				order.product_name.clone(),
			),
			("line_items[0][quantity]", order.quantity.to_string()),
			("mode", CHECKOUT_MODE.to_string()),
			("metadata[parcelId]", order.parcel_id.clone()),
			("customer_email", order.customer_email.clone()),
			("success_url", order.success_url.clone()),
			("cancel_url", order.cancel_url.clone()),
		]
	}
}

#[async_trait]
impl CheckoutGateway for StripeCheckoutGateway {
	async fn create_session(
		&self,
		order: &CheckoutOrder,
	) -> Result<CheckoutSession, CheckoutError> {
		let resp = self
			.http_client
			.post(format!("{}{CHECKOUT_SESSIONS_PATH}", self.api_url))
			.bearer_auth(&self.secret_key)
			.form(&Self::session_form(order))
			.send()
			.await
			.map_err(|e| CheckoutError::Transport(e.to_string()))?;

		let status = resp.status();
		if !status.is_success() {
			let message = resp
				.json::<StripeErrorBody>()
				.await
				.ok()
				.and_then(|body| body.error.message)
				.unwrap_or_else(|| status.to_string());
			error!(
				"Stripe rejected checkout session for parcel {}: {message}",
				order.parcel_id
			);
			return Err(CheckoutError::Rejected {
				status: status.as_u16(),
				message,
			});
		}

		let session: StripeCheckoutSession = resp
			.json()
			.await
			.map_err(|e| CheckoutError::Transport(e.to_string()))?;
		debug!("Created checkout session {} for parcel {}", session.id, order.parcel_id);

		match session.url {
			Some(url) if !url.is_empty() => Ok(CheckoutSession {
				id: session.id,
				url,
			}),
			_ => Err(CheckoutError::MissingUrl),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn test_session_form_describes_one_line_item() {
		let order = CheckoutOrder {
			unit_amount:    2500,
			currency:       "usd".to_string(),
			quantity:       1,
			product_name:   "Please pay for: Box1".to_string(),
			parcel_id:      "abc".to_string(),
			customer_email: "a@b.com".to_string(),
			success_url:    "http://site/ok".to_string(),
			cancel_url:     "http://site/cancel".to_string(),
		};

		let form: HashMap<&str, String> =
			StripeCheckoutGateway::session_form(&order).into_iter().collect();
		let field = |name: &str| form.get(name).cloned();

		assert_eq!(field("line_items[0][price_data][currency]"), Some("usd".to_string()));
		assert_eq!(field("line_items[0][price_data][unit_amount]"), Some("2500".to_string()));
		assert_eq!(
			field("line_items[0][price_data][product_data][name]"),
			Some("Please pay for: Box1".to_string())
		);
		assert_eq!(field("line_items[0][quantity]"), Some("1".to_string()));
		assert_eq!(field("mode"), Some("payment".to_string()));
		assert_eq!(field("metadata[parcelId]"), Some("abc".to_string()));
		assert_eq!(field("customer_email"), Some("a@b.com".to_string()));
		assert_eq!(field("success_url"), Some("http://site/ok".to_string()));
		assert_eq!(field("cancel_url"), Some("http://site/cancel".to_string()));
	}

	#[test]
	fn test_new_trims_trailing_slash() {
		let gateway = StripeCheckoutGateway::new(
			Client::new(),
			"http://stripe.test/".to_string(),
			"sk_test".to_string(),
		);

		assert_eq!(gateway.api_url, "http://stripe.test");
	}
}
