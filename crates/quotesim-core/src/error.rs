use thiserror::Error;

/// Validation and contract errors exposed by `quotesim-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("window must span at least one day")]
    EmptyWindow,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("principal must be greater than zero")]
    ZeroPrincipal,

    #[error("date must be ISO YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("date arithmetic out of range stepping back {days} days")]
    DateOutOfRange { days: u32 },

    #[error("market share breakdown cannot be empty")]
    EmptyBreakdown,
    #[error("market share slice name cannot be empty")]
    EmptySliceName,
    #[error("market share slice '{name}' must have weight in (0, 100], got {weight}")]
    InvalidShareWeight { name: String, weight: f64 },
}
