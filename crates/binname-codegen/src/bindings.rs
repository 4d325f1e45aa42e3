//! Codegen bindings: the facts the annotating pass hands to code generation.
//!
//! The tree stays read-only; everything the pass computes goes into side
//! tables keyed by `NodeIndex` or `SymbolId`. Tables are insertion-ordered,
//! and insertion follows traversal order, so iterating a table replays the
//! order in which decisions were made.
//!
//! Nothing in here is read back by the pass except binary names of
//! enclosing classes (trivial enum entries reuse their enum's name).

use binname_resolve::SymbolId;
use binname_syntax::NodeIndex;
use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxBuildHasher, FxHashMap};
use std::sync::Arc;

/// Closure-capture record of one anonymous or class-like entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosureRecord {
    /// Class symbol, synthetic for lambdas, references and local functions.
    pub class: SymbolId,
    /// Innermost enclosing class at the point of declaration.
    pub enclosing: Option<SymbolId>,
    pub binary_name: Arc<str>,
    pub is_function_literal: bool,
    /// Inner classes hold the outer instance.
    pub captures_this: bool,
    /// Extension function whose receiver is in scope of the class body.
    pub enclosing_receiver: Option<SymbolId>,
}

/// Argument or operand that must be wrapped into a SAM interface instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SamAnnotation {
    pub argument: NodeIndex,
    pub interface: SymbolId,
}

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

#[derive(Clone, Debug, Default)]
pub struct CodegenBindings {
    binary_names: FxIndexMap<SymbolId, Arc<str>>,
    /// Owner of each binary name; aliases are not registered here.
    name_owners: FxHashMap<Arc<str>, SymbolId>,
    closures: FxIndexMap<NodeIndex, ClosureRecord>,
    class_for_function: FxIndexMap<SymbolId, SymbolId>,
    enum_entries_needing_subclass: FxIndexSet<SymbolId>,
    inner_classes: FxIndexMap<SymbolId, Vec<SymbolId>>,
    sam_values: FxIndexMap<NodeIndex, SymbolId>,
}

impl CodegenBindings {
    pub fn new() -> Self {
        CodegenBindings::default()
    }

    /// Assign `name` to `symbol`.
    ///
    /// Returns the symbol that already owns `name`, if it is a different
    /// one; the assignment is still recorded so the caller decides whether
    /// the clash is fatal.
    pub fn insert_binary_name(&mut self, symbol: SymbolId, name: Arc<str>) -> Option<SymbolId> {
        let clash = match self.name_owners.get(&name) {
            Some(&owner) if owner != symbol => Some(owner),
            Some(_) => None,
            None => {
                self.name_owners.insert(Arc::clone(&name), symbol);
                None
            }
        };
        self.binary_names.insert(symbol, name);
        clash
    }

    /// Give `symbol` the binary name of an existing class without claiming
    /// ownership of it.
    pub fn alias_binary_name(&mut self, symbol: SymbolId, name: Arc<str>) {
        self.binary_names.insert(symbol, name);
    }

    pub fn binary_name(&self, symbol: SymbolId) -> Option<&Arc<str>> {
        self.binary_names.get(&symbol)
    }

    pub fn binary_names(&self) -> impl Iterator<Item = (SymbolId, &Arc<str>)> + '_ {
        self.binary_names.iter().map(|(symbol, name)| (*symbol, name))
    }

    /// `false` if `node` already has a record; the existing one is kept.
    pub fn insert_closure(&mut self, node: NodeIndex, record: ClosureRecord) -> bool {
        if self.closures.contains_key(&node) {
            return false;
        }
        self.closures.insert(node, record);
        true
    }

    pub fn closure(&self, node: NodeIndex) -> Option<&ClosureRecord> {
        self.closures.get(&node)
    }

    pub fn closures(&self) -> impl Iterator<Item = (NodeIndex, &ClosureRecord)> + '_ {
        self.closures.iter().map(|(node, record)| (*node, record))
    }

    pub fn record_class_for_function(&mut self, function: SymbolId, class: SymbolId) {
        self.class_for_function.insert(function, class);
    }

    pub fn class_for_function(&self, function: SymbolId) -> Option<SymbolId> {
        self.class_for_function.get(&function).copied()
    }

    pub fn classes_for_functions(&self) -> impl Iterator<Item = (SymbolId, SymbolId)> + '_ {
        self.class_for_function
            .iter()
            .map(|(function, class)| (*function, *class))
    }

    pub fn mark_enum_entry_needs_subclass(&mut self, entry: SymbolId) {
        self.enum_entries_needing_subclass.insert(entry);
    }

    pub fn enum_entry_needs_subclass(&self, entry: SymbolId) -> bool {
        self.enum_entries_needing_subclass.contains(&entry)
    }

    pub fn enum_entries_needing_subclass(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.enum_entries_needing_subclass.iter().copied()
    }

    pub fn add_inner_class(&mut self, outer: SymbolId, inner: SymbolId) {
        let inners = self.inner_classes.entry(outer).or_default();
        if !inners.contains(&inner) {
            inners.push(inner);
        }
    }

    pub fn inner_classes(&self, outer: SymbolId) -> &[SymbolId] {
        self.inner_classes.get(&outer).map_or(&[], Vec::as_slice)
    }

    pub fn all_inner_classes(&self) -> impl Iterator<Item = (SymbolId, &[SymbolId])> + '_ {
        self.inner_classes
            .iter()
            .map(|(outer, inners)| (*outer, inners.as_slice()))
    }

    /// Returns the interface previously recorded for `argument`, if any.
    pub fn record_sam_value(&mut self, argument: NodeIndex, interface: SymbolId) -> Option<SymbolId> {
        self.sam_values.insert(argument, interface)
    }

    pub fn sam_value(&self, argument: NodeIndex) -> Option<SymbolId> {
        self.sam_values.get(&argument).copied()
    }

    pub fn sam_values(&self) -> impl Iterator<Item = SamAnnotation> + '_ {
        self.sam_values
            .iter()
            .map(|(argument, interface)| SamAnnotation {
                argument: *argument,
                interface: *interface,
            })
    }

    pub fn closure_count(&self) -> usize {
        self.closures.len()
    }

    pub fn sam_count(&self) -> usize {
        self.sam_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binary_names.is_empty()
            && self.closures.is_empty()
            && self.class_for_function.is_empty()
            && self.enum_entries_needing_subclass.is_empty()
            && self.sam_values.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/bindings_tests.rs"]
mod tests;
