use quotesim_core::{
    MarketDate, SeededSource, SeriesConfig, SeriesGenerator, ThreadRngSource, UniformSource,
};
use serde_json::{json, Value};

use crate::cli::SeriesArgs;
use crate::error::CliError;

pub fn run(args: &SeriesArgs, seed: Option<u64>) -> Result<Value, CliError> {
    let config = SeriesConfig {
        window_days: args.window,
        base_price: args.base_price,
        ..SeriesConfig::default()
    };
    let generator = SeriesGenerator::new(config)?;

    let mut source: Box<dyn UniformSource> = match seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    };

    let series = generator.generate(MarketDate::today_utc(), source.as_mut())?;

    Ok(json!({
        "window_days": config.window_days,
        "base_price": config.base_price,
        "points": serde_json::to_value(series.points())?,
    }))
}
