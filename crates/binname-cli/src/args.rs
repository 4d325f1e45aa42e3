use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the binname binary.
#[derive(Parser, Debug)]
#[command(
    name = "binname",
    version,
    about = "Assign binary names, closure records and SAM annotations to resolved units"
)]
pub struct CliArgs {
    /// Program files (JSON) to annotate.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Treat resolution as partial: unresolved declarations are skipped
    /// instead of aborting their unit. Overrides the mode in the input.
    #[arg(long)]
    pub partial: bool,

    /// JSON file with naming options; overrides options given in the input.
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,

    /// Number of worker threads (defaults to one per core).
    #[arg(short = 'j', long)]
    pub jobs: Option<usize>,
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
