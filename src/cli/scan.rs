use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use tracing::info;

use crate::adapter::odds_api;
use crate::config::Config;
use crate::detector::scan_all;
use crate::domain::EventOdds;
use crate::error::Result;

use super::ScanArgs;

/// Scan an odds snapshot and write the reports as a JSON array to stdout.
pub fn execute(args: &ScanArgs, config: &Config) -> Result<()> {
    let events = load_events(&args.input)?;
    info!(events = events.len(), input = %args.input.display(), "Loaded odds snapshot");

    let reports = scan_all(&events, &config.detector);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &reports)?;
    } else {
        serde_json::to_writer(&mut out, &reports)?;
    }
    writeln!(out)?;
    Ok(())
}

fn load_events(input: &Path) -> Result<Vec<EventOdds>> {
    if input == Path::new("-") {
        odds_api::read_events(io::stdin().lock())
    } else {
        let file = File::open(input)?;
        odds_api::read_events(BufReader::new(file))
    }
}
