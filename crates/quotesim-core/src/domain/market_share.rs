use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One named competitor slice of the market-share pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShareSlice {
    pub name: String,
    pub weight: f64,
}

impl MarketShareSlice {
    pub fn new(name: impl Into<String>, weight: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptySliceName);
        }
        if !weight.is_finite() || weight <= 0.0 || weight > 100.0 {
            return Err(ValidationError::InvalidShareWeight { name, weight });
        }
        Ok(Self { name, weight })
    }
}

/// Competitor market-share breakdown shipped with the demo site.
///
/// Weights are percentage points and need not sum to exactly 100; the
/// normalized view rescales against the actual total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShareBreakdown {
    slices: Vec<MarketShareSlice>,
}

impl MarketShareBreakdown {
    pub fn new(slices: Vec<MarketShareSlice>) -> Result<Self, ValidationError> {
        if slices.is_empty() {
            return Err(ValidationError::EmptyBreakdown);
        }
        Ok(Self { slices })
    }

    /// Global EV-battery installed-capacity shares as published on the page.
    pub fn bundled() -> Self {
        let slices = [
            ("CATL", 37.9),
            ("BYD", 17.8),
            ("LG Energy Solution", 9.4),
            ("CALB", 4.3),
            ("SK On", 3.9),
            ("Panasonic", 3.7),
            ("Others", 23.0),
        ]
        .into_iter()
        .map(|(name, weight)| {
            MarketShareSlice::new(name, weight).expect("bundled slice must be valid")
        })
        .collect();

        Self { slices }
    }

    pub fn slices(&self) -> &[MarketShareSlice] {
        &self.slices
    }

    pub fn total_weight(&self) -> f64 {
        self.slices.iter().map(|slice| slice.weight).sum()
    }

    /// Each slice's share of the actual total, as a percentage.
    pub fn normalized(&self) -> Vec<(String, f64)> {
        let total = self.total_weight();
        self.slices
            .iter()
            .map(|slice| (slice.name.clone(), slice.weight / total * 100.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_weight() {
        let err = MarketShareSlice::new("CATL", 0.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidShareWeight { .. }));

        let err = MarketShareSlice::new("CATL", 100.5).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidShareWeight { .. }));
    }

    #[test]
    fn rejects_empty_breakdown() {
        let err = MarketShareBreakdown::new(Vec::new()).expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyBreakdown));
    }

    #[test]
    fn normalized_shares_sum_to_hundred() {
        let breakdown = MarketShareBreakdown::bundled();
        let total: f64 = breakdown.normalized().iter().map(|(_, pct)| pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn bundled_slices_pass_validation() {
        for slice in MarketShareBreakdown::bundled().slices() {
            MarketShareSlice::new(slice.name.clone(), slice.weight)
                .expect("bundled slice must validate");
        }
    }

    #[test]
    fn bundled_breakdown_leads_with_catl() {
        let breakdown = MarketShareBreakdown::bundled();
        let leader = &breakdown.slices()[0];
        assert_eq!(leader.name, "CATL");
        assert!(leader.weight > breakdown.slices()[1].weight);
    }
}
