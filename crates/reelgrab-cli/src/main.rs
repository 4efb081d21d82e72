use reelgrab_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Log to the state dir when possible; stderr otherwise.
    let log_file = match logging::init_logging() {
        Ok(path) => Some(path),
        Err(_) => {
            logging::init_logging_stderr();
            None
        }
    };

    if let Err(err) = Cli::run_from_args(log_file).await {
        eprintln!("reelgrab error: {:#}", err);
        std::process::exit(1);
    }
}
