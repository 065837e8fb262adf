//! Money helpers
//!
//! Every monetary computation goes through `Decimal` so that repeated
//! float addition cannot drift a total. Values enter as `f64` (the
//! persisted representation), are converted once, combined exactly,
//! and rounded back to two decimal places on the way out.

use rust_decimal::prelude::*;

use crate::store::{StoreError, StoreResult};

/// Decimal places used when rounding a total back to `f64`.
const DECIMAL_PLACES: u32 = 2;

/// Upper bound for a unit price.
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Upper bound for a single line quantity.
pub const MAX_QUANTITY: i32 = 9999;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Rounds to two decimal places, midpoints away from zero, and converts
/// back to the persisted `f64` representation.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Exact line total for a unit price and quantity.
#[inline]
pub fn line_total(price: f64, qty: i32) -> Decimal {
    to_decimal(price) * Decimal::from(qty)
}

pub fn require_finite(value: f64, field: &str) -> StoreResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StoreError::Validation(format!(
            "{field} must be a finite number"
        )))
    }
}

pub fn validate_price(value: f64) -> StoreResult<()> {
    require_finite(value, "price")?;
    if value < 0.0 {
        return Err(StoreError::Validation(
            "price must not be negative".to_string(),
        ));
    }
    if value > MAX_PRICE {
        return Err(StoreError::Validation(format!(
            "price must not exceed {MAX_PRICE}"
        )));
    }
    Ok(())
}

pub fn validate_quantity(value: i32) -> StoreResult<()> {
    if value < 1 {
        return Err(StoreError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }
    if value > MAX_QUANTITY {
        return Err(StoreError::Validation(format!(
            "quantity must not exceed {MAX_QUANTITY}"
        )));
    }
    Ok(())
}

/// Formats a price for display.
///
/// # Examples
///
/// ```
/// use smartdine_store::money::format_price;
///
/// assert_eq!(format_price(12.5), "$12.50");
/// ```
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== conversion =====

    #[test]
    fn test_decimal_addition_is_exact() {
        let sum = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(sum, to_decimal(0.3));
        assert_eq!(to_f64(sum), 0.3);
    }

    #[test]
    fn test_to_f64_rounds_midpoint_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(25, 3)), 0.03);
        assert_eq!(to_f64(Decimal::new(-25, 3)), -0.03);
        assert_eq!(to_f64(Decimal::new(1998, 2)), 19.98);
    }

    // ===== line totals =====

    #[test]
    fn test_line_total_two_at_nine_ninety_nine() {
        assert_eq!(to_f64(line_total(9.99, 2)), 19.98);
    }

    #[test]
    fn test_accumulated_cents_do_not_drift() {
        let mut total = Decimal::ZERO;
        for _ in 0..10 {
            total += line_total(0.10, 1);
        }
        assert_eq!(to_f64(total), 1.0);
    }

    // ===== validation =====

    #[test]
    fn test_validate_price_bounds() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(MAX_PRICE).is_ok());
        assert!(matches!(
            validate_price(-0.01),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_price(MAX_PRICE + 1.0),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_price(f64::NAN),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_price(f64::INFINITY),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_QUANTITY).is_ok());
        assert!(matches!(
            validate_quantity(0),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_quantity(-3),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            validate_quantity(MAX_QUANTITY + 1),
            Err(StoreError::Validation(_))
        ));
    }

    // ===== formatting =====

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(19.5), "$19.50");
        assert_eq!(format_price(0.0), "$0.00");
    }
}
