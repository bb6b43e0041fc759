use clap::Parser;
use oddsarb::cli::{check, scan, CheckCommand, Cli, Commands};
use tracing::{error, info};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => {
            let config = match args.resolve_config() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to load config: {e}");
                    std::process::exit(1);
                }
            };

            config.init_logging();
            info!("oddsarb scan starting");

            let result = scan::execute(&args, &config);
            if let Err(e) = &result {
                error!(error = %e, "Scan failed");
            }
            result
        }
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
