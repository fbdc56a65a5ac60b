use clap::{Args, Parser, Subcommand, ValueEnum};

/// quotesim - demo data toolkit for the single-stock analysis page.
///
/// Generates the synthetic price series behind the page chart and runs the
/// investment-return calculator behind the page form.
#[derive(Debug, Parser)]
#[command(name = "quotesim", version, about = "Single-stock demo data toolkit")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Seed for deterministic series generation.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a synthetic daily price series ending today.
    Series(SeriesArgs),
    /// Compute an investment-return quote.
    Quote(QuoteArgs),
    /// Print the bundled market-share breakdown.
    MarketShare,
}

#[derive(Debug, Args)]
pub struct SeriesArgs {
    /// Number of calendar days in the window.
    #[arg(long, default_value_t = 90)]
    pub window: u32,

    /// Price the walk oscillates around.
    #[arg(long, default_value_t = 350.0)]
    pub base_price: f64,
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Principal in units of 10,000 currency.
    pub amount: f64,

    /// Target price per share.
    pub target_price: f64,

    /// Reference price the shares are bought at.
    #[arg(long, default_value_t = quotesim_core::DEFAULT_REFERENCE_PRICE)]
    pub current_price: f64,
}
