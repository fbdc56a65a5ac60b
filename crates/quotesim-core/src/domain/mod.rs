mod date;
mod market_share;
mod models;

pub use date::MarketDate;
pub use market_share::{MarketShareBreakdown, MarketShareSlice};
pub use models::{InvestmentQuote, PricePoint, PriceSeries};

pub(crate) use models::{validate_finite, validate_non_negative, validate_positive};
