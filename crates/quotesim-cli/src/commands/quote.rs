use quotesim_core::ReturnCalculator;
use serde_json::{json, Value};

use crate::cli::QuoteArgs;
use crate::error::CliError;

pub fn run(args: &QuoteArgs) -> Result<Value, CliError> {
    let calculator = ReturnCalculator::new(args.current_price)?;
    let quote = calculator.quote(args.amount, args.target_price)?;

    Ok(json!({
        "reference_price": calculator.reference_price(),
        "target_price": args.target_price,
        "shares": quote.shares,
        "profit": quote.profit,
        "return_rate_percent": quote.return_rate_percent,
    }))
}
