use clap::Parser;
use rig_core::rig_error;

mod cli;
mod doctor;
mod manifest;
mod plan;
mod prompt;
mod steps;

use cli::Args;

fn main() {
    let _log_guard = rig_logging::init_subscriber();
    let args = Args::parse();

    match cli::execute(args) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            rig_error!("{}", e);
            std::process::exit(e.exit_code().unwrap_or(1));
        }
    }
}
