//! Closure records for class-like and anonymous entities.

use crate::bindings::{ClosureRecord, CodegenBindings};
use crate::error::{AnnotateResult, AnnotationError};
use binname_resolve::{ResolutionStore, SymbolId};
use binname_syntax::NodeIndex;
use std::sync::Arc;
use tracing::trace;

/// One closure about to be recorded.
#[derive(Clone, Debug)]
pub struct ClosureRequest {
    pub node: NodeIndex,
    pub class: SymbolId,
    /// Innermost class frame at the point of declaration.
    pub enclosing: Option<SymbolId>,
    /// Declaration container of `class`. Synthetic closure classes are not
    /// in the store, so the caller passes it.
    pub container: Option<SymbolId>,
    pub binary_name: Arc<str>,
    pub is_function_literal: bool,
}

pub struct ClosureRecorder<'a, R: ResolutionStore + ?Sized> {
    store: &'a R,
    check_unique_names: bool,
}

impl<'a, R: ResolutionStore + ?Sized> ClosureRecorder<'a, R> {
    pub fn new(store: &'a R, check_unique_names: bool) -> Self {
        ClosureRecorder {
            store,
            check_unique_names,
        }
    }

    /// Write the record, the binary name of its class and, for
    /// non-lambdas, the inner-class link to the enclosing class.
    pub fn record(
        &self,
        bindings: &mut CodegenBindings,
        request: ClosureRequest,
    ) -> AnnotateResult<()> {
        let ClosureRequest {
            node,
            class,
            enclosing,
            container,
            binary_name,
            is_function_literal,
        } = request;

        if bindings.closure(node).is_some() {
            return Err(AnnotationError::DuplicateAnnotation {
                node,
                what: "closure record",
            });
        }

        if let Some(existing) = bindings.insert_binary_name(class, Arc::clone(&binary_name))
            && self.check_unique_names
        {
            return Err(AnnotationError::DuplicateBinaryName {
                node,
                name: binary_name.to_string(),
                symbol: class,
                existing,
            });
        }

        let captures_this = self.store.class(class).is_some_and(|c| c.is_inner);
        let enclosing_receiver = container.filter(|&function| {
            self.store
                .function(function)
                .is_some_and(|f| f.receiver.is_some())
        });

        trace!(
            node = node.0,
            %class,
            name = &*binary_name,
            is_function_literal,
            "[annotate] closure recorded"
        );
        bindings.insert_closure(
            node,
            ClosureRecord {
                class,
                enclosing,
                binary_name,
                is_function_literal,
                captures_this,
                enclosing_receiver,
            },
        );

        if let Some(outer) = enclosing
            && !is_function_literal
        {
            bindings.add_inner_class(outer, class);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/closure_recorder_tests.rs"]
mod tests;
