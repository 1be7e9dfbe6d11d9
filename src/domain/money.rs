use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::checkout::CheckoutError;

/// Converts an amount in major currency units (e.g. `"12.34"` dollars) into
/// minor units (cents), rounding half away from zero.
pub fn to_minor_units(amount: &str) -> Result<i64, CheckoutError> {
	let trimmed = amount.trim();
	let major = Decimal::from_str(trimmed)
		.or_else(|_| Decimal::from_scientific(trimmed))
		.map_err(|_| CheckoutError::InvalidAmount(amount.to_string()))?;

	let minor = major
		.checked_mul(Decimal::ONE_HUNDRED)
		.map(|cents| {
			cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
		})
		.and_then(|cents| cents.to_i64())
		.ok_or_else(|| CheckoutError::InvalidAmount(amount.to_string()))?;

	// Stripe refuses non-positive unit amounts too; reject them here so the
	// caller gets a 400 instead of a provider error.
	if minor <= 0 {
		return Err(CheckoutError::InvalidAmount(amount.to_string()));
	}

	Ok(minor)
}
