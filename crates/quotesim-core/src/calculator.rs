use serde::{Deserialize, Serialize};

use crate::domain::{validate_finite, validate_positive, InvestmentQuote};
use crate::error::ValidationError;

/// Multiplier from the form's "ten-thousands of currency" principal unit.
pub const PRINCIPAL_UNIT: f64 = 10_000.0;

/// Reference share price the demo site ships with.
pub const DEFAULT_REFERENCE_PRICE: f64 = 380.40;

/// Investment-return calculator around a fixed reference price.
///
/// Shares are bought at the reference price with the whole principal
/// (fractional shares are never produced), then valued at the target price.
/// Pure and deterministic: identical inputs always yield identical quotes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnCalculator {
    reference_price: f64,
}

impl Default for ReturnCalculator {
    fn default() -> Self {
        Self {
            reference_price: DEFAULT_REFERENCE_PRICE,
        }
    }
}

impl ReturnCalculator {
    pub fn new(reference_price: f64) -> Result<Self, ValidationError> {
        validate_positive("reference_price", reference_price)?;
        Ok(Self { reference_price })
    }

    pub const fn reference_price(&self) -> f64 {
        self.reference_price
    }

    /// Quote for `principal_wan` units of 10,000 currency at `target_price`.
    ///
    /// A zero principal is rejected before any division, so the percentage
    /// return can never come out non-finite.
    pub fn quote(
        &self,
        principal_wan: f64,
        target_price: f64,
    ) -> Result<InvestmentQuote, ValidationError> {
        validate_finite("principal", principal_wan)?;
        if principal_wan == 0.0 {
            return Err(ValidationError::ZeroPrincipal);
        }
        if principal_wan < 0.0 {
            return Err(ValidationError::NegativeValue { field: "principal" });
        }
        validate_positive("target_price", target_price)?;

        let principal = principal_wan * PRINCIPAL_UNIT;
        let shares = (principal / self.reference_price).floor() as u64;
        let future_value = shares as f64 * target_price;
        let profit = future_value - principal;
        let return_rate_percent = profit / principal * 100.0;

        InvestmentQuote::new(shares, profit, return_rate_percent)
    }

    /// Form-boundary variant: absent input yields no quote at all, matching
    /// the page's silent no-op when a field is empty. This is a distinct
    /// outcome from an explicit zero principal, which is an error.
    pub fn quote_from_form(
        &self,
        principal_wan: Option<f64>,
        target_price: Option<f64>,
    ) -> Result<Option<InvestmentQuote>, ValidationError> {
        match (principal_wan, target_price) {
            (Some(principal), Some(target)) => self.quote(principal, target).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_profitable_target() {
        let calculator = ReturnCalculator::default();
        let quote = calculator.quote(1.0, 420.00).expect("must quote");

        assert_eq!(quote.shares, 26);
        assert!((quote.profit - 920.00).abs() < 1e-9);
        assert!((quote.return_rate_percent - 9.20).abs() < 1e-9);
    }

    #[test]
    fn rejects_zero_principal() {
        let calculator = ReturnCalculator::default();
        let err = calculator.quote(0.0, 420.00).expect_err("must fail");
        assert!(matches!(err, ValidationError::ZeroPrincipal));
    }

    #[test]
    fn absent_form_input_yields_no_quote() {
        let calculator = ReturnCalculator::default();
        assert_eq!(calculator.quote_from_form(None, Some(420.00)), Ok(None));
        assert_eq!(calculator.quote_from_form(Some(1.0), None), Ok(None));
    }

    #[test]
    fn rejects_non_positive_reference_price() {
        let err = ReturnCalculator::new(-1.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonPositiveValue {
                field: "reference_price"
            }
        ));
    }
}
