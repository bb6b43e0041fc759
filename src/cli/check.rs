use std::path::Path;

use crate::config::Config;
use crate::error::Result;

/// Validate configuration file without scanning.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    let config = Config::load(path)?;

    println!("✓ Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Log level: {}", config.logging.level);
    println!("  Log format: {:?}", config.logging.format);
    println!(
        "  Opportunities only: {}",
        config.detector.opportunities_only
    );
    println!("  Minimum edge: {}", config.detector.min_edge);
    println!("  Include quotes: {}", config.detector.include_quotes);

    Ok(())
}
