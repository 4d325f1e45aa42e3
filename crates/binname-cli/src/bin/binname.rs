#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use binname_cli::args::CliArgs;
use binname_cli::driver;
use clap::Parser;
use std::io::Write;

/// Exit status when at least one unit was aborted.
const EXIT_UNIT_ERRORS: i32 = 1;

fn main() -> Result<()> {
    // Zero cost unless BINNAME_LOG or RUST_LOG is set.
    binname::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let reports = driver::run(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &reports)
    } else {
        serde_json::to_writer(&mut out, &reports)
    }
    .context("failed to write report")?;
    writeln!(out).context("failed to write report")?;

    let errors: usize = reports.iter().map(|report| report.error_count).sum();
    if errors > 0 {
        for diagnostic in reports
            .iter()
            .flat_map(|report| &report.units)
            .flat_map(|unit| &unit.diagnostics)
        {
            eprintln!("{diagnostic}");
        }
        std::process::exit(EXIT_UNIT_ERRORS);
    }
    Ok(())
}
