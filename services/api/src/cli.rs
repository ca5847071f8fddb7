use crate::commands::{run_quote, run_tables, QuoteArgs, TablesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use haulquote::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "haulquote",
    about = "Price junk-removal jobs from detected items, location, and job options",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Price a single quote request and print the result as JSON
    Quote(QuoteArgs),
    /// Print the active pricing tables as JSON
    Tables(TablesArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Tables(args) => run_tables(args),
    }
}
