//! Command-line interface definitions.

pub mod check;
pub mod scan;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// oddsarb - Two-sided betting arbitrage detection across bookmakers.
#[derive(Parser, Debug)]
#[command(name = "oddsarb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an odds snapshot for arbitrage opportunities
    Scan(ScanArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `oddsarb check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Odds snapshot (JSON event array); `-` reads stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit only events with an arbitrage opportunity
    #[arg(long)]
    pub opportunities_only: bool,

    /// Override minimum edge for emitted opportunities
    #[arg(long)]
    pub min_edge: Option<Decimal>,

    /// Attach each bookmaker's recognised prices to the output
    #[arg(long)]
    pub include_quotes: bool,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl ScanArgs {
    /// Load the configuration file (if any) and apply CLI overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if self.opportunities_only {
            config.detector.opportunities_only = true;
        }
        if let Some(min_edge) = self.min_edge {
            config.detector.min_edge = min_edge;
        }
        if self.include_quotes {
            config.detector.include_quotes = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        if self.json_logs {
            config.logging.format = crate::config::LogFormat::Json;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scan_overrides_apply_on_top_of_defaults() {
        let cli = Cli::parse_from([
            "oddsarb",
            "scan",
            "--input",
            "odds.json",
            "--opportunities-only",
            "--min-edge",
            "0.01",
            "--json-logs",
        ]);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };

        let config = args.resolve_config().unwrap();
        assert!(config.detector.opportunities_only);
        assert_eq!(config.detector.min_edge, dec!(0.01));
        assert_eq!(config.logging.format, crate::config::LogFormat::Json);
        assert!(!config.detector.include_quotes);
    }

    #[test]
    fn scan_rejects_out_of_range_min_edge_override() {
        let cli = Cli::parse_from(["oddsarb", "scan", "--min-edge", "1.5"]);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert!(args.resolve_config().is_err());
    }
}
