use serde::{Deserialize, Serialize};

use crate::{MarketDate, ValidationError};

/// A single synthetic daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: MarketDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: MarketDate, price: f64) -> Result<Self, ValidationError> {
        validate_finite("price", price)?;
        Ok(Self { date, price })
    }
}

/// Ordered daily series produced by the generator.
///
/// Points are appended oldest-first during generation and never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(date, price)` string pairs in the shape the chart host expects:
    /// ISO dates and fixed 2-decimal prices.
    pub fn to_plot_pairs(&self) -> Vec<(String, String)> {
        self.points
            .iter()
            .map(|point| (point.date.format_iso(), format!("{:.2}", point.price)))
            .collect()
    }
}

/// Result of the investment-return calculation.
///
/// Derived entirely from the three calculator inputs; recomputed fresh on
/// every invocation and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentQuote {
    pub shares: u64,
    pub profit: f64,
    pub return_rate_percent: f64,
}

impl InvestmentQuote {
    pub fn new(shares: u64, profit: f64, return_rate_percent: f64) -> Result<Self, ValidationError> {
        validate_finite("profit", profit)?;
        validate_finite("return_rate_percent", return_rate_percent)?;
        Ok(Self {
            shares,
            profit,
            return_rate_percent,
        })
    }
}

pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

pub(crate) fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}

pub(crate) fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    validate_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
