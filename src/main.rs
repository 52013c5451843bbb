mod cli;
mod error;
mod launcher;
mod locate;
mod types;

use crate::error::LaunchError;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        let code = e.downcast_ref::<LaunchError>().map_or(1, LaunchError::exit_code);
        std::process::exit(code);
    }
}
