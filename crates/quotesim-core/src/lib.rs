//! Computational core of the quotesim single-stock demo site.
//!
//! This crate contains:
//! - Calendar-date and price-series value objects
//! - The synthetic price-series generator behind the demo chart
//! - The investment-return calculator behind the page form
//! - The bundled market-share breakdown
//! - Structured validation errors

pub mod calculator;
pub mod domain;
pub mod error;
pub mod rng;
pub mod series;

pub use calculator::{ReturnCalculator, DEFAULT_REFERENCE_PRICE, PRINCIPAL_UNIT};
pub use domain::{
    InvestmentQuote, MarketDate, MarketShareBreakdown, MarketShareSlice, PricePoint, PriceSeries,
};
pub use error::ValidationError;
pub use rng::{FixedSource, SeededSource, ThreadRngSource, UniformSource};
pub use series::{SeriesConfig, SeriesGenerator};
