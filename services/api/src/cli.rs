use crate::demo::{run_demo, run_wait_estimate, DemoArgs, WaitEstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use triage_core::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Clinical Triage Service",
    about = "Run and demonstrate the clinical triage rule engine from the command line",
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
    /// Run a scripted end-to-end triage walkthrough on sample cases
    Demo(DemoArgs),
    /// Estimate waits for a queue of already-triaged acuities
    EstimateWait(WaitEstimateArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::EstimateWait(args) => run_wait_estimate(args),
    }
}
