use clap::Args;
use haulquote::config::AppConfig;
use haulquote::error::AppError;
use haulquote::pricing::{PricingTables, Quote, QuoteCalculator, QuoteRequest};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// JSON quote request file, or `-` to read standard input
    #[arg(long)]
    pub(crate) request: PathBuf,
    /// Apply per-category bulk discounts even if QUOTE_APPLY_BULK_DISCOUNTS is off
    #[arg(long)]
    pub(crate) bulk_discounts: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TablesArgs {
    /// Print the bundled tables even when QUOTE_TABLES_PATH points elsewhere
    #[arg(long)]
    pub(crate) bundled: bool,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let QuoteArgs {
        request,
        bulk_discounts,
    } = args;

    let mut pricing = AppConfig::load()?.pricing;
    pricing.apply_bulk_discounts |= bulk_discounts;
    let calculator = pricing.calculator()?;

    let raw = read_request(&request)?;
    let quote = quote_from_json(&calculator, &raw)?;
    println!("{}", serde_json::to_string_pretty(&quote)?);

    Ok(())
}

pub(crate) fn run_tables(args: TablesArgs) -> Result<(), AppError> {
    let tables = if args.bundled {
        PricingTables::standard()
    } else {
        AppConfig::load()?.pricing.tables()?
    };

    println!("{}", serde_json::to_string_pretty(&tables)?);
    Ok(())
}

fn read_request(path: &Path) -> Result<String, AppError> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }

    Ok(std::fs::read_to_string(path)?)
}

pub(crate) fn quote_from_json(calculator: &QuoteCalculator, raw: &str) -> Result<Quote, AppError> {
    let request: QuoteRequest = serde_json::from_str(raw)?;
    Ok(calculator.calculate(&request)?)
}
