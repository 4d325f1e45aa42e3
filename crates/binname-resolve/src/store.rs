//! The read-only resolution contract.

use crate::calls::ResolvedCall;
use crate::closure_types::{ClosureShape, closure_supertype};
use crate::symbols::{ClassSymbol, FunctionSymbol, Symbol, SymbolId};
use crate::types::TypeRef;
use binname_syntax::NodeIndex;
use serde::{Deserialize, Serialize};

/// How complete the upstream analysis was.
///
/// Under `Partial` analysis (IDE-style lazy resolution) declarations may have
/// no symbol, and consumers skip them silently. Under `Complete` analysis a
/// missing symbol on a declaration that needs one is an upstream defect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisMode {
    #[default]
    Complete,
    Partial,
}

impl AnalysisMode {
    #[inline]
    pub fn is_partial(self) -> bool {
        self == AnalysisMode::Partial
    }
}

/// Frozen output of semantic analysis for one compilation unit.
///
/// Implementations must be pure lookups: the same query always returns the
/// same answer for the lifetime of the store.
pub trait ResolutionStore {
    fn analysis_mode(&self) -> AnalysisMode;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    /// Number of symbols, so synthetic symbols can be numbered after them.
    fn symbol_count(&self) -> usize;

    /// Symbol declared by a declaration node (class, object, enum entry,
    /// function, function literal, property, callable reference).
    fn declared_symbol(&self, node: NodeIndex) -> Option<SymbolId>;

    fn resolved_call(&self, node: NodeIndex) -> Option<&ResolvedCall>;

    /// Function an operator or indexing expression resolved to.
    fn reference_target(&self, node: NodeIndex) -> Option<SymbolId>;

    /// Class synthesized for a script file.
    fn script_class(&self, file: NodeIndex) -> Option<SymbolId>;

    fn class(&self, id: SymbolId) -> Option<&ClassSymbol> {
        self.symbol(id)?.as_class()
    }

    fn function(&self, id: SymbolId) -> Option<&FunctionSymbol> {
        self.symbol(id)?.as_function()
    }

    fn container(&self, id: SymbolId) -> Option<SymbolId> {
        let container = self.symbol(id)?.container;
        container.is_some().then_some(container)
    }

    /// Declared directly in a package.
    fn is_top_level(&self, id: SymbolId) -> bool {
        match self.container(id) {
            None => true,
            Some(container) => self.symbol(container).is_some_and(Symbol::is_package),
        }
    }

    /// The interface of `ty` when it is a single-abstract-method interface type.
    fn sam_interface(&self, ty: &TypeRef) -> Option<SymbolId> {
        let class = ty.class_symbol()?;
        self.class(class)
            .filter(|symbol| symbol.is_sam_interface)
            .map(|_| class)
    }

    /// The adapted function when `function` is a SAM adapter.
    fn original_if_sam_adapter(&self, function: SymbolId) -> Option<SymbolId> {
        self.function(function)?.sam_adapter_for
    }

    /// Supertype an anonymous class implementing `function` must extend.
    fn closure_supertype(&self, function: SymbolId, shape: ClosureShape) -> Option<TypeRef> {
        closure_supertype(self, function, shape)
    }
}

/// Creates synthetic classes for closures.
///
/// Kept apart from [`ResolutionStore`] so the store can stay shared and
/// immutable while each unit allocates its own closure classes.
pub trait ClosureClassFactory {
    fn create_closure_class(
        &mut self,
        function: SymbolId,
        container: SymbolId,
        supertype: TypeRef,
    ) -> SymbolId;
}
