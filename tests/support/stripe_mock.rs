use parcel_server::infrastructure::payments::stripe_checkout_gateway::StripeCheckoutGateway;
use parcel_server::use_cases::create_checkout_session::CreateCheckoutSessionUseCase;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const TEST_SECRET_KEY: &str = "sk_test_123";
pub const TEST_SITE_DOMAIN: &str = "http://parcels.test";

pub fn checkout_sessions_endpoint() -> MockBuilder {
	Mock::given(method("POST"))
		.and(path("/v1/checkout/sessions"))
		.and(header(
			"authorization",
			format!("Bearer {TEST_SECRET_KEY}").as_str(),
		))
		.and(header("content-type", "application/x-www-form-urlencoded"))
}

pub fn session_created(id: &str) -> ResponseTemplate {
	ResponseTemplate::new(200).set_body_json(json!({
		"id": id,
		"object": "checkout.session",
		"mode": "payment",
		"url": format!("https://checkout.stripe.test/c/pay/{id}"),
	}))
}

pub fn checkout_use_case(
	stripe: &MockServer,
) -> CreateCheckoutSessionUseCase<StripeCheckoutGateway> {
	let gateway = StripeCheckoutGateway::new(
		reqwest::Client::new(),
		stripe.uri(),
		TEST_SECRET_KEY.to_string(),
	);
	CreateCheckoutSessionUseCase::new(gateway, TEST_SITE_DOMAIN.to_string())
}
