use clap::Parser;
use describe_dataset::args::Args;
use describe_dataset::config::AppConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    describe_dataset::init_logging(args.verbose);

    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match describe_dataset::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
