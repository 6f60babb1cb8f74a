mod cli;

use asciify::config::Config;
use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_filter())
        .init();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config file: {}", e);
            eprintln!("Using default settings.\n");
            Config::default()
        }
    };

    if let Err(e) = cli::run(&args, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
