//! In-memory resolution snapshot.
//!
//! Symbols are program-wide and shared; node-keyed tables are per unit
//! because `NodeIndex` is only meaningful inside one arena. A
//! `ResolutionSnapshot` borrows both, so passes over different units can
//! run in parallel against one `SymbolArena`.

use crate::calls::{ResolvedCall, ResolvedValueArgument};
use crate::store::{AnalysisMode, ResolutionStore};
use crate::symbols::{Symbol, SymbolArena, SymbolId};
use binname_common::{Diagnostic, diagnostic_codes};
use binname_syntax::{NodeArena, NodeIndex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Node-keyed resolution results of one compilation unit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitResolution {
    pub declarations: FxHashMap<NodeIndex, SymbolId>,
    pub resolved_calls: FxHashMap<NodeIndex, ResolvedCall>,
    pub reference_targets: FxHashMap<NodeIndex, SymbolId>,
    pub script_classes: FxHashMap<NodeIndex, SymbolId>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("node {node} is not part of the unit's arena")]
    DanglingNode { node: NodeIndex },
    #[error("node {node} resolves to unknown symbol {symbol}")]
    DanglingSymbol { node: NodeIndex, symbol: SymbolId },
    #[error("resolved call at node {call} maps an argument to unknown node {argument}")]
    DanglingArgument { call: NodeIndex, argument: NodeIndex },
}

impl SnapshotError {
    pub fn node(&self) -> NodeIndex {
        match self {
            SnapshotError::DanglingNode { node } | SnapshotError::DanglingSymbol { node, .. } => {
                *node
            }
            SnapshotError::DanglingArgument { call, .. } => *call,
        }
    }

    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        Diagnostic::error(
            file,
            self.node().is_some().then_some(self.node().0),
            self.to_string(),
            diagnostic_codes::MALFORMED_SNAPSHOT,
        )
    }
}

impl UnitResolution {
    pub fn new() -> Self {
        UnitResolution::default()
    }

    pub fn record_declaration(&mut self, node: NodeIndex, symbol: SymbolId) {
        self.declarations.insert(node, symbol);
    }

    pub fn record_call(&mut self, node: NodeIndex, call: ResolvedCall) {
        self.resolved_calls.insert(node, call);
    }

    pub fn record_reference_target(&mut self, node: NodeIndex, target: SymbolId) {
        self.reference_targets.insert(node, target);
    }

    pub fn record_script_class(&mut self, file: NodeIndex, class: SymbolId) {
        self.script_classes.insert(file, class);
    }

    /// Check that every key is a node of `arena` and every value a symbol of
    /// `symbols`. Keys are visited in index order so the first reported
    /// problem is stable.
    pub fn validate(&self, arena: &NodeArena, symbols: &SymbolArena) -> Result<(), SnapshotError> {
        let check_node = |node: NodeIndex| {
            if arena.get(node).is_some() {
                Ok(())
            } else {
                Err(SnapshotError::DanglingNode { node })
            }
        };
        let check_symbol = |node: NodeIndex, symbol: SymbolId| {
            if symbols.contains(symbol) {
                Ok(())
            } else {
                Err(SnapshotError::DanglingSymbol { node, symbol })
            }
        };

        for table in [
            &self.declarations,
            &self.reference_targets,
            &self.script_classes,
        ] {
            let mut entries: Vec<_> = table.iter().map(|(n, s)| (*n, *s)).collect();
            entries.sort_unstable();
            for (node, symbol) in entries {
                check_node(node)?;
                check_symbol(node, symbol)?;
            }
        }

        let mut calls: Vec<_> = self.resolved_calls.iter().collect();
        calls.sort_unstable_by_key(|(node, _)| **node);
        for (&call_node, call) in calls {
            check_node(call_node)?;
            check_symbol(call_node, call.resulting_descriptor)?;
            for argument in &call.value_arguments {
                let nodes: &[NodeIndex] = match argument {
                    ResolvedValueArgument::Expression(expr) => std::slice::from_ref(expr),
                    ResolvedValueArgument::Vararg(exprs) => exprs,
                    ResolvedValueArgument::Default => &[],
                };
                for &argument in nodes {
                    if arena.get(argument).is_none() {
                        return Err(SnapshotError::DanglingArgument {
                            call: call_node,
                            argument,
                        });
                    }
                }
            }
        }

        debug!(
            declarations = self.declarations.len(),
            calls = self.resolved_calls.len(),
            targets = self.reference_targets.len(),
            "[snapshot] validated unit resolution"
        );
        Ok(())
    }
}

/// Borrowed view combining shared symbols with one unit's tables.
#[derive(Clone, Copy, Debug)]
pub struct ResolutionSnapshot<'a> {
    symbols: &'a SymbolArena,
    unit: &'a UnitResolution,
    mode: AnalysisMode,
}

impl<'a> ResolutionSnapshot<'a> {
    pub fn new(symbols: &'a SymbolArena, unit: &'a UnitResolution) -> Self {
        ResolutionSnapshot {
            symbols,
            unit,
            mode: AnalysisMode::Complete,
        }
    }

    pub fn with_mode(mut self, mode: AnalysisMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn symbols(&self) -> &'a SymbolArena {
        self.symbols
    }

    pub fn unit(&self) -> &'a UnitResolution {
        self.unit
    }
}

impl ResolutionStore for ResolutionSnapshot<'_> {
    fn analysis_mode(&self) -> AnalysisMode {
        self.mode
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    fn declared_symbol(&self, node: NodeIndex) -> Option<SymbolId> {
        self.unit.declarations.get(&node).copied()
    }

    fn resolved_call(&self, node: NodeIndex) -> Option<&ResolvedCall> {
        self.unit.resolved_calls.get(&node)
    }

    fn reference_target(&self, node: NodeIndex) -> Option<SymbolId> {
        self.unit.reference_targets.get(&node).copied()
    }

    fn script_class(&self, file: NodeIndex) -> Option<SymbolId> {
        self.unit.script_classes.get(&file).copied()
    }
}

#[cfg(test)]
#[path = "../tests/snapshot_tests.rs"]
mod tests;
