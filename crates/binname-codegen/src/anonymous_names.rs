//! Invented names for anonymous class-like entities.
//!
//! Ordinals are counted per scope key (the binary name of the enclosing
//! frame), start at 1, and are never reset within a unit.

use crate::error::{AnnotateResult, AnnotationError};
use binname_syntax::{NodeIndex, NodeKind};
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct AnonymousCounter {
    counts: FxHashMap<Arc<str>, u32>,
    invented: u32,
}

impl AnonymousCounter {
    pub fn new() -> Self {
        AnonymousCounter::default()
    }

    /// Whether a node of `kind` may receive an invented name.
    pub fn accepts(kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::FunctionLiteral
                | NodeKind::ObjectLiteral
                | NodeKind::CallableReference
                | NodeKind::NamedFunction
        )
    }

    /// `scope$N` for the next ordinal of `scope`.
    pub fn invent_name(&mut self, scope: &Arc<str>) -> Arc<str> {
        let next = match self.counts.get_mut(scope) {
            Some(count) => {
                *count += 1;
                *count
            }
            None => {
                self.counts.insert(Arc::clone(scope), 1);
                1
            }
        };
        self.invented += 1;
        Arc::from(format!("{scope}${next}"))
    }

    /// [`invent_name`](Self::invent_name) for the declaration at `node`,
    /// rejecting shapes that never get an invented name.
    pub fn invent_for(
        &mut self,
        node: NodeIndex,
        kind: NodeKind,
        scope: &Arc<str>,
    ) -> AnnotateResult<Arc<str>> {
        if !Self::accepts(kind) {
            return Err(AnnotationError::IllegalDeclarationShape { node, kind });
        }
        Ok(self.invent_name(scope))
    }

    /// Total names invented in this unit.
    pub fn invented(&self) -> u32 {
        self.invented
    }
}

#[cfg(test)]
#[path = "../tests/anonymous_names_tests.rs"]
mod tests;
