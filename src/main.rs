use std::process::ExitCode;

use clap::Parser;
use ecclesia_lib::bootstrap::run_cli;
use ecclesia_lib::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    match run_cli(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
