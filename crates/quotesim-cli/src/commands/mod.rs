mod market_share;
mod quote;
mod series;

use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<Value, CliError> {
    match &cli.command {
        Command::Series(args) => series::run(args, cli.seed),
        Command::Quote(args) => quote::run(args),
        Command::MarketShare => market_share::run(),
    }
}
