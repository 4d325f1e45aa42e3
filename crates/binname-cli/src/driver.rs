//! Annotate every unit of every input program.
//!
//! Units are independent: each gets its own pass instance, naming state and
//! synthetic classes, and all of them read one shared `SymbolArena`. A unit
//! that fails validation or annotation is reported with its diagnostic and
//! does not affect its siblings.

use crate::args::CliArgs;
use crate::input::{ProgramInput, UnitInput, load_options, load_program};
use crate::report::{ProgramReport, UnitReport};
use anyhow::{Context, Result};
use binname_codegen::{AnnotateOptions, annotate_unit};
use binname_resolve::{AnalysisMode, ResolutionSnapshot, SymbolArena};
use rayon::prelude::*;
use tracing::{debug, info_span, warn};

pub fn run(args: &CliArgs) -> Result<Vec<ProgramReport>> {
    let options_override = args.options.as_deref().map(load_options).transpose()?;
    let pool = build_pool(args.jobs)?;

    args.inputs
        .iter()
        .map(|path| {
            let program = load_program(path)?;
            let mode = if args.partial {
                AnalysisMode::Partial
            } else {
                program.mode
            };
            let options = options_override
                .clone()
                .or_else(|| program.options.clone())
                .unwrap_or_default();
            let input = path.display().to_string();
            Ok(pool.install(|| annotate_program(&program, mode, &options, input)))
        })
        .collect()
}

pub fn annotate_program(
    program: &ProgramInput,
    mode: AnalysisMode,
    options: &AnnotateOptions,
    input: String,
) -> ProgramReport {
    let span = info_span!("program", input = %input, units = program.units.len());
    let _enter = span.enter();

    let units = program
        .units
        .par_iter()
        .map(|unit| annotate_unit_input(&program.symbols, unit, mode, options))
        .collect();
    ProgramReport::new(input, units)
}

pub fn annotate_unit_input(
    symbols: &SymbolArena,
    unit: &UnitInput,
    mode: AnalysisMode,
    options: &AnnotateOptions,
) -> UnitReport {
    let span = info_span!("unit", file = %unit.file_name);
    let _enter = span.enter();

    if let Err(err) = unit.resolution.validate(&unit.arena, symbols) {
        warn!("[driver] {}: rejected resolution: {err}", unit.file_name);
        return UnitReport::failed(&unit.file_name, err.to_diagnostic(&unit.file_name));
    }

    let store = ResolutionSnapshot::new(symbols, &unit.resolution).with_mode(mode);
    match annotate_unit(&unit.arena, &store, unit.root, options) {
        Ok((output, synthetic)) => {
            debug!(
                "[driver] {}: {} closures, {} synthetic classes",
                unit.file_name,
                output.stats.closures,
                synthetic.len()
            );
            UnitReport::annotated(&unit.file_name, &output, &synthetic)
        }
        Err(err) => {
            warn!("[driver] {}: {err}", unit.file_name);
            UnitReport::failed(&unit.file_name, err.to_diagnostic(&unit.file_name))
        }
    }
}

fn build_pool(jobs: Option<usize>) -> Result<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    builder.build().context("failed to start worker threads")
}
