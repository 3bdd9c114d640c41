//! Interleave CLI
//!
//! Command-line entry point: `interleave even.bin odd.bin [output]`.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use interleave::cli::{commands, program_name, Cli};

fn main() -> ExitCode {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let program = program_name(std::env::args_os().next());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands::run(&cli, &program, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(
                "Run failed: {} {:?}",
                e.error_code(),
                e.recovery_suggestions()
            );
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
