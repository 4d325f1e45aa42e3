//! JSON input format.
//!
//! ```json
//! {
//!   "mode": "partial",
//!   "symbols": [ ... ],
//!   "options": { "companionSuffix": "$Companion" },
//!   "units": [
//!     { "fileName": "a/Outer.kt", "root": 12, "arena": [ ... ], "resolution": { ... } }
//!   ]
//! }
//! ```
//!
//! `symbols` is shared by all units; node indices in `resolution` refer to
//! the unit's own `arena`.

use anyhow::{Context, Result};
use binname_codegen::AnnotateOptions;
use binname_resolve::{AnalysisMode, SymbolArena, UnitResolution};
use binname_syntax::{NodeArena, NodeIndex};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramInput {
    #[serde(default)]
    pub mode: AnalysisMode,
    pub symbols: SymbolArena,
    #[serde(default)]
    pub options: Option<AnnotateOptions>,
    pub units: Vec<UnitInput>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInput {
    pub file_name: String,
    pub root: NodeIndex,
    pub arena: NodeArena,
    #[serde(default)]
    pub resolution: UnitResolution,
}

pub fn load_program(path: &Path) -> Result<ProgramInput> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse program {}", path.display()))
}

pub fn load_options(path: &Path) -> Result<AnnotateOptions> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse options {}", path.display()))
}
