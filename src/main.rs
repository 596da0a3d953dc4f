use std::process::ExitCode;

use clap::Parser;

use cli2xls::args::Args;
use cli2xls::{commands, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = ctrlc::set_handler(|| {
        println!();
        std::process::exit(1);
    }) {
        tracing::warn!("[!] Could not install the interrupt handler: {}", e);
    }

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("[!] An error occurred during the operation ({e})");
            ExitCode::FAILURE
        }
    }
}
