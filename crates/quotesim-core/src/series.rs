use serde::{Deserialize, Serialize};

use crate::domain::{
    validate_finite, validate_non_negative, validate_positive, MarketDate, PricePoint, PriceSeries,
};
use crate::error::ValidationError;
use crate::rng::UniformSource;

/// Shape of the synthetic walk.
///
/// The defaults reproduce the demo-site chart: a 90-day window around a base
/// of 350, noise within ±10, a sine overlay of amplitude 5 with period 10
/// indices, and an upward drift of 0.5 per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    pub window_days: u32,
    pub base_price: f64,
    pub noise_amplitude: f64,
    pub wave_amplitude: f64,
    pub wave_period: f64,
    pub daily_drift: f64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            window_days: 90,
            base_price: 350.0,
            noise_amplitude: 10.0,
            wave_amplitude: 5.0,
            wave_period: 10.0,
            daily_drift: 0.5,
        }
    }
}

impl SeriesConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.window_days == 0 {
            return Err(ValidationError::EmptyWindow);
        }
        validate_positive("base_price", self.base_price)?;
        validate_non_negative("noise_amplitude", self.noise_amplitude)?;
        validate_non_negative("wave_amplitude", self.wave_amplitude)?;
        validate_positive("wave_period", self.wave_period)?;
        validate_finite("daily_drift", self.daily_drift)?;
        Ok(())
    }
}

/// Generator for the synthetic daily price trajectory.
///
/// For index `i` in an N-day window ending at `ending`, the point is dated
/// `ending - (N - 1 - i)` days and priced
/// `base + noise + wave_amplitude * sin(i / wave_period) + daily_drift * i`,
/// with noise drawn uniformly from ±`noise_amplitude` and the result rounded
/// to 2 decimals. Points come out oldest-first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGenerator {
    config: SeriesConfig,
}

impl SeriesGenerator {
    pub fn new(config: SeriesConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    pub fn generate(
        &self,
        ending: MarketDate,
        source: &mut dyn UniformSource,
    ) -> Result<PriceSeries, ValidationError> {
        let window = self.config.window_days;
        let mut points = Vec::with_capacity(window as usize);

        for i in 0..window {
            let date = ending.minus_days(window - 1 - i)?;
            let index = f64::from(i);

            let noise = (source.next_uniform() - 0.5) * (2.0 * self.config.noise_amplitude);
            let wave = self.config.wave_amplitude * (index / self.config.wave_period).sin();
            let drift = self.config.daily_drift * index;
            let price = round2(self.config.base_price + noise + wave + drift);

            points.push(PricePoint::new(date, price)?);
        }

        Ok(PriceSeries::new(points))
    }
}

/// Round half away from zero at 2 fractional digits, as the page's
/// `toFixed(2)` display did.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
