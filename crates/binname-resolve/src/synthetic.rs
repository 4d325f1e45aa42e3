//! Synthetic closure classes allocated while annotating one unit.

use crate::store::{ClosureClassFactory, ResolutionStore};
use crate::symbols::{ClassKind, ClassSymbol, Symbol, SymbolData, SymbolId};
use crate::types::TypeRef;
use std::sync::Arc;
use tracing::trace;

pub const CLOSURE_CLASS_NAME: &str = "<closure>";

/// Closure classes numbered after the shared symbols.
///
/// IDs are unit-local: two units annotated against the same store hand out
/// the same IDs, so a `SyntheticClasses` is only meaningful next to the
/// bindings of its own unit.
#[derive(Clone, Debug, Default)]
pub struct SyntheticClasses {
    base: u32,
    classes: Vec<Symbol>,
    functions: Vec<SymbolId>,
}

impl SyntheticClasses {
    pub fn starting_at(base: usize) -> Self {
        SyntheticClasses {
            base: base as u32,
            classes: Vec::new(),
            functions: Vec::new(),
        }
    }

    pub fn for_store<R: ResolutionStore + ?Sized>(store: &R) -> Self {
        Self::starting_at(store.symbol_count())
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        self.slot(id).is_some()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.classes.get(self.slot(id)?)
    }

    /// Function the closure class was created for.
    pub fn function_of(&self, id: SymbolId) -> Option<SymbolId> {
        self.functions.get(self.slot(id)?).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, symbol)| (SymbolId(self.base + i as u32), symbol))
    }

    fn slot(&self, id: SymbolId) -> Option<usize> {
        if id.is_none() || id.0 < self.base {
            return None;
        }
        let slot = (id.0 - self.base) as usize;
        (slot < self.classes.len()).then_some(slot)
    }
}

impl ClosureClassFactory for SyntheticClasses {
    fn create_closure_class(
        &mut self,
        function: SymbolId,
        container: SymbolId,
        supertype: TypeRef,
    ) -> SymbolId {
        let id = SymbolId(self.base + self.classes.len() as u32);
        self.classes.push(Symbol {
            name: Arc::from(CLOSURE_CLASS_NAME),
            container,
            data: SymbolData::Class(ClassSymbol {
                kind: ClassKind::Anonymous,
                supertypes: vec![supertype],
                is_inner: false,
                is_sam_interface: false,
            }),
        });
        self.functions.push(function);
        trace!(%function, class = %id, "[synthetic] closure class created");
        id
    }
}

#[cfg(test)]
#[path = "../tests/synthetic_tests.rs"]
mod tests;
