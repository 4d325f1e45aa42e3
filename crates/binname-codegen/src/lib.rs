//! Binary-name and closure annotating pass.
//!
//! Runs after semantic resolution and before code generation. For one
//! compilation unit it:
//!
//! - assigns internal (binary) names to every class-like entity: classes,
//!   objects, companions, anonymous objects, lambda and reference closures
//! - records a closure record per class-like entity, linking it to its
//!   enclosing class
//! - marks lambda-typed arguments of SAM-adapter calls, operators and
//!   indexing with the functional interface they must be wrapped into
//!
//! Independent units may be annotated in parallel against one shared
//! resolution snapshot; each pass owns its naming state and bindings.

pub mod anonymous_names;
pub mod annotating_pass;
pub mod bindings;
pub mod closure_recorder;
pub mod error;
pub mod naming;
pub mod naming_context;
pub mod options;
pub mod sam_annotator;

pub use annotating_pass::{AnnotateOutput, AnnotateStats, AnnotatingPass};
pub use bindings::{ClosureRecord, CodegenBindings, SamAnnotation};
pub use error::{AnnotateResult, AnnotationError};
pub use options::AnnotateOptions;

use binname_resolve::{ResolutionStore, SyntheticClasses};
use binname_syntax::{NodeArena, NodeIndex};

/// Annotate one unit, allocating closure classes after the store's symbols.
pub fn annotate_unit<R: ResolutionStore + ?Sized>(
    arena: &NodeArena,
    store: &R,
    root: NodeIndex,
    options: &AnnotateOptions,
) -> AnnotateResult<(AnnotateOutput, SyntheticClasses)> {
    let mut synthetic = SyntheticClasses::for_store(store);
    let output = AnnotatingPass::new(arena, store, &mut synthetic, options).run(root)?;
    Ok((output, synthetic))
}
