use crate::report::{run_locations, run_score, LocationsArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use climate_score::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Retirement Climate Score",
    about = "Score retirement locations on projected climate suitability",
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
    /// Score one location for one decade and print the breakdown
    Score(ScoreArgs),
    /// List the locations and decades available for scoring
    Locations(LocationsArgs),
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
        Command::Score(args) => run_score(args),
        Command::Locations(args) => run_locations(args),
    }
}
