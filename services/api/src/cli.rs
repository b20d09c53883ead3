use crate::demo::{run_check, run_demo, run_recommend, CheckArgs, DemoArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use govjob_match::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Government Job Match",
    about = "Score candidates against government job postings from the command line",
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
    /// Score one candidate profile against one job requirement
    Check(CheckArgs),
    /// Rank eligible postings for a candidate
    Recommend(RecommendArgs),
    /// Run the built-in eligibility scenarios end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON file with `candidates` and `jobs` arrays to preload
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Demo(args) => run_demo(args),
    }
}
