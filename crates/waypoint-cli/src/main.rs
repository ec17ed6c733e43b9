mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Logging is initialized inside, once flags are known.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("waypoint error: {:#}", err);
        std::process::exit(1);
    }
}
