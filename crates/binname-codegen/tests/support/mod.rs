//! Fixture builder shared by the pass tests.
//!
//! There is no parser in this workspace, so fixtures assemble the tree and
//! its resolution side by side: add nodes to `arena`, allocate symbols, then
//! bind them with `declare` / `call` / `target`.
#![allow(dead_code)]

use binname_resolve::{
    AnalysisMode, ClassKind, FunctionSymbol, FunctionTypeKind, FunctionTypeRef, ResolutionSnapshot,
    ResolvedCall, ResolvedValueArgument, SymbolArena, SymbolData, SymbolId, TypeRef,
    UnitResolution, ValueParameter,
};
use binname_syntax::{NodeArena, NodeIndex};
use std::sync::Arc;

#[derive(Default)]
pub struct UnitBuilder {
    pub arena: NodeArena,
    pub symbols: SymbolArena,
    pub unit: UnitResolution,
}

impl UnitBuilder {
    pub fn new() -> Self {
        UnitBuilder::default()
    }

    pub fn package(&mut self, fq_name: &str) -> SymbolId {
        self.symbols.alloc_package(fq_name)
    }

    pub fn class(&mut self, name: &str, container: SymbolId, kind: ClassKind) -> SymbolId {
        self.symbols.alloc_class(name, container, kind)
    }

    pub fn inner_class(&mut self, name: &str, container: SymbolId) -> SymbolId {
        let class = self.class(name, container, ClassKind::Class);
        if let Some(SymbolData::Class(data)) = self.symbols.get_mut(class).map(|s| &mut s.data) {
            data.is_inner = true;
        }
        class
    }

    pub fn sam_interface(&mut self, name: &str, container: SymbolId) -> SymbolId {
        let class = self.class(name, container, ClassKind::Interface);
        if let Some(SymbolData::Class(data)) = self.symbols.get_mut(class).map(|s| &mut s.data) {
            data.is_sam_interface = true;
        }
        class
    }

    pub fn function(&mut self, name: &str, container: SymbolId, parameters: Vec<TypeRef>) -> SymbolId {
        self.symbols
            .alloc_function(name, container, signature(None, parameters, None))
    }

    pub fn extension_function(
        &mut self,
        name: &str,
        container: SymbolId,
        receiver: TypeRef,
        parameters: Vec<TypeRef>,
    ) -> SymbolId {
        self.symbols
            .alloc_function(name, container, signature(Some(receiver), parameters, None))
    }

    /// Adapter of `original` taking function types where it takes SAM types.
    pub fn sam_adapter(&mut self, name: &str, container: SymbolId, original: SymbolId) -> SymbolId {
        let arity = self
            .symbols
            .get(original)
            .and_then(|s| s.as_function())
            .map_or(0, |f| f.parameters.len());
        let parameters = (0..arity).map(|_| lambda_type(0)).collect();
        self.symbols
            .alloc_function(name, container, signature(None, parameters, Some(original)))
    }

    /// Function-literal symbol; lambdas are contained in the declaration
    /// that holds them.
    pub fn lambda(&mut self, container: SymbolId) -> SymbolId {
        self.function("<anonymous>", container, Vec::new())
    }

    pub fn property(&mut self, name: &str, container: SymbolId) -> SymbolId {
        self.symbols.alloc_property(name, container, TypeRef::Unknown)
    }

    pub fn declare(&mut self, node: NodeIndex, symbol: SymbolId) -> NodeIndex {
        self.unit.record_declaration(node, symbol);
        node
    }

    pub fn call(&mut self, node: NodeIndex, function: SymbolId, arguments: Vec<NodeIndex>) {
        let arguments = arguments
            .into_iter()
            .map(ResolvedValueArgument::Expression)
            .collect();
        self.unit.record_call(node, ResolvedCall::new(function, arguments));
    }

    pub fn call_with(&mut self, node: NodeIndex, function: SymbolId, arguments: Vec<ResolvedValueArgument>) {
        self.unit.record_call(node, ResolvedCall::new(function, arguments));
    }

    pub fn target(&mut self, node: NodeIndex, function: SymbolId) {
        self.unit.record_reference_target(node, function);
    }

    pub fn script(&mut self, file: NodeIndex, class: SymbolId) {
        self.unit.record_script_class(file, class);
    }

    pub fn snapshot(&self) -> ResolutionSnapshot<'_> {
        ResolutionSnapshot::new(&self.symbols, &self.unit)
    }

    pub fn partial_snapshot(&self) -> ResolutionSnapshot<'_> {
        self.snapshot().with_mode(AnalysisMode::Partial)
    }
}

pub fn lambda_type(arity: usize) -> TypeRef {
    TypeRef::Function(FunctionTypeRef {
        kind: FunctionTypeKind::Function,
        receiver: None,
        parameters: vec![TypeRef::Unknown; arity],
        return_type: Box::new(TypeRef::Unknown),
    })
}

fn signature(
    receiver: Option<TypeRef>,
    parameters: Vec<TypeRef>,
    sam_adapter_for: Option<SymbolId>,
) -> FunctionSymbol {
    FunctionSymbol {
        receiver,
        parameters: parameters
            .into_iter()
            .enumerate()
            .map(|(index, ty)| ValueParameter {
                name: Arc::from(format!("p{index}")),
                index,
                ty,
            })
            .collect(),
        return_type: TypeRef::Unknown,
        sam_adapter_for,
    }
}
