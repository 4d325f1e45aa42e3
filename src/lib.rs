//! binname: binary-name, closure and SAM annotating pass.
//!
//! Facade over the workspace crates, plus process-wide tracing setup for
//! the driver binaries.

// Diagnostics and shared limits
pub use binname_common as common;
pub use binname_common::{Diagnostic, DiagnosticCategory};

// Resolved declaration/expression tree
pub use binname_syntax as syntax;
pub use binname_syntax::{NodeArena, NodeIndex};

// Resolution snapshot contract
pub use binname_resolve as resolve;
pub use binname_resolve::{
    AnalysisMode, ClosureClassFactory, ResolutionSnapshot, ResolutionStore, SymbolArena, SymbolId,
    SyntheticClasses, UnitResolution,
};

// The pass
pub use binname_codegen as codegen;
pub use binname_codegen::{
    AnnotateOptions, AnnotateOutput, AnnotateStats, AnnotatingPass, AnnotationError,
    CodegenBindings, annotate_unit,
};

// Tracing/logging configuration (BINNAME_LOG, BINNAME_LOG_FORMAT)
pub mod tracing_config;
