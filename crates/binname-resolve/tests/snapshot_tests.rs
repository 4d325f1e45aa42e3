use super::*;
use crate::closure_types::ClosureShape;
use crate::symbols::{ClassKind, FunctionSymbol, SymbolData, ValueParameter};
use crate::types::{FunctionTypeKind, TypeRef};
use std::sync::Arc;

fn unit_type(symbols: &mut SymbolArena, package: SymbolId) -> TypeRef {
    TypeRef::class(symbols.alloc_class("Unit", package, ClassKind::Object))
}

fn function(parameters: Vec<TypeRef>, return_type: TypeRef) -> FunctionSymbol {
    FunctionSymbol {
        receiver: None,
        parameters: parameters
            .into_iter()
            .enumerate()
            .map(|(index, ty)| ValueParameter {
                name: Arc::from(format!("p{index}")),
                index,
                ty,
            })
            .collect(),
        return_type,
        sam_adapter_for: None,
    }
}

#[test]
fn test_lookups_go_through_unit_tables() {
    let mut arena = NodeArena::new();
    let class_node = arena.add_class("A", binname_syntax::ClassDeclKind::Class, vec![], vec![]);
    let root = arena.add_file("a.kt", "", false, vec![class_node]);

    let mut symbols = SymbolArena::new();
    let package = symbols.alloc_package("");
    let class = symbols.alloc_class("A", package, ClassKind::Class);

    let mut unit = UnitResolution::new();
    unit.record_declaration(class_node, class);

    let snapshot = ResolutionSnapshot::new(&symbols, &unit);
    assert_eq!(snapshot.declared_symbol(class_node), Some(class));
    assert_eq!(snapshot.declared_symbol(root), None);
    assert!(snapshot.is_top_level(class));
    assert_eq!(snapshot.analysis_mode(), AnalysisMode::Complete);
    assert!(
        snapshot
            .with_mode(AnalysisMode::Partial)
            .analysis_mode()
            .is_partial()
    );
    assert!(unit.validate(&arena, &symbols).is_ok());
}

#[test]
fn test_nested_class_is_not_top_level() {
    let mut symbols = SymbolArena::new();
    let package = symbols.alloc_package("a.b");
    let outer = symbols.alloc_class("Outer", package, ClassKind::Class);
    let inner = symbols.alloc_class("Inner", outer, ClassKind::Class);
    let unit = UnitResolution::new();
    let snapshot = ResolutionSnapshot::new(&symbols, &unit);

    assert!(snapshot.is_top_level(outer));
    assert!(!snapshot.is_top_level(inner));
    assert_eq!(snapshot.container(inner), Some(outer));
    assert_eq!(snapshot.container(package), None);
}

#[test]
fn test_sam_interface_and_adapter_lookup() {
    let mut symbols = SymbolArena::new();
    let package = symbols.alloc_package("");
    let runnable = symbols.alloc_class("Runnable", package, ClassKind::Interface);
    if let Some(SymbolData::Class(class)) = symbols.get_mut(runnable).map(|s| &mut s.data) {
        class.is_sam_interface = true;
    }
    let plain = symbols.alloc_class("Plain", package, ClassKind::Interface);
    let unit_ty = unit_type(&mut symbols, package);
    let original = symbols.alloc_function(
        "post",
        package,
        function(vec![TypeRef::class(runnable)], unit_ty.clone()),
    );
    let mut adapter = function(vec![TypeRef::Unknown], unit_ty);
    adapter.sam_adapter_for = Some(original);
    let adapter = symbols.alloc_function("post", package, adapter);

    let unit = UnitResolution::new();
    let snapshot = ResolutionSnapshot::new(&symbols, &unit);
    assert_eq!(snapshot.sam_interface(&TypeRef::class(runnable)), Some(runnable));
    assert_eq!(snapshot.sam_interface(&TypeRef::class(plain)), None);
    assert_eq!(snapshot.sam_interface(&TypeRef::Unknown), None);
    assert_eq!(snapshot.original_if_sam_adapter(adapter), Some(original));
    assert_eq!(snapshot.original_if_sam_adapter(original), None);
}

#[test]
fn test_closure_supertype_shapes() {
    let mut symbols = SymbolArena::new();
    let package = symbols.alloc_package("");
    let string = TypeRef::class(symbols.alloc_class("String", package, ClassKind::Class));
    let owner = symbols.alloc_class("Owner", package, ClassKind::Class);
    let unit_ty = unit_type(&mut symbols, package);

    let top = symbols.alloc_function("top", package, function(vec![string.clone()], unit_ty.clone()));
    let member = symbols.alloc_function("member", owner, function(vec![], unit_ty.clone()));
    let mut ext = function(vec![], unit_ty);
    ext.receiver = Some(string.clone());
    let ext = symbols.alloc_function("ext", package, ext);

    let unit = UnitResolution::new();
    let snapshot = ResolutionSnapshot::new(&symbols, &unit);

    let literal = snapshot
        .closure_supertype(top, ClosureShape::Literal)
        .expect("function supertype");
    let literal = literal.as_function().expect("function type");
    assert_eq!(literal.kind, FunctionTypeKind::Function);
    assert_eq!(literal.parameters, vec![string.clone()]);

    let reference = snapshot
        .closure_supertype(member, ClosureShape::Reference)
        .expect("member reference");
    assert_eq!(
        reference.as_function().map(|f| f.kind),
        Some(FunctionTypeKind::MemberReference)
    );
    assert_eq!(reference.function_arity(), Some(1));

    let ext_literal = snapshot
        .closure_supertype(ext, ClosureShape::Literal)
        .expect("extension literal");
    assert_eq!(
        ext_literal.as_function().map(|f| f.kind),
        Some(FunctionTypeKind::ExtensionFunction)
    );
    let ext_reference = snapshot
        .closure_supertype(ext, ClosureShape::Reference)
        .expect("extension reference");
    assert_eq!(
        ext_reference.as_function().map(|f| f.kind),
        Some(FunctionTypeKind::ExtensionReference)
    );

    assert_eq!(snapshot.closure_supertype(owner, ClosureShape::Literal), None);
}

#[test]
fn test_validate_reports_dangling_symbol() {
    let mut arena = NodeArena::new();
    let lambda = arena.add_function_literal(vec![]);
    arena.add_file("a.kt", "", false, vec![lambda]);
    let symbols = SymbolArena::new();

    let mut unit = UnitResolution::new();
    unit.record_declaration(lambda, SymbolId(42));

    let err = unit
        .validate(&arena, &symbols)
        .expect_err("dangling symbol must be rejected");
    assert_eq!(
        err,
        SnapshotError::DanglingSymbol {
            node: lambda,
            symbol: SymbolId(42)
        }
    );
    let diag = err.to_diagnostic("a.kt");
    assert_eq!(diag.code, diagnostic_codes::MALFORMED_SNAPSHOT);
    assert_eq!(diag.node, Some(lambda.0));
}

#[test]
fn test_validate_reports_dangling_argument() {
    let mut arena = NodeArena::new();
    let callee = arena.add_leaf("f");
    let call = arena.add_call(callee, vec![]);
    arena.add_file("a.kt", "", false, vec![call]);

    let mut symbols = SymbolArena::new();
    let package = symbols.alloc_package("");
    let unit_ty = unit_type(&mut symbols, package);
    let f = symbols.alloc_function("f", package, function(vec![TypeRef::Unknown], unit_ty));

    let mut unit = UnitResolution::new();
    unit.record_call(
        call,
        ResolvedCall::new(f, vec![ResolvedValueArgument::Expression(NodeIndex(99))]),
    );

    assert_eq!(
        unit.validate(&arena, &symbols),
        Err(SnapshotError::DanglingArgument {
            call,
            argument: NodeIndex(99)
        })
    );
}

#[test]
fn test_unit_resolution_json_round_trip() {
    let mut unit = UnitResolution::new();
    unit.record_declaration(NodeIndex(3), SymbolId(1));
    unit.record_reference_target(NodeIndex(5), SymbolId(2));
    unit.record_call(
        NodeIndex(7),
        ResolvedCall::new(
            SymbolId(2),
            vec![
                ResolvedValueArgument::Expression(NodeIndex(6)),
                ResolvedValueArgument::Default,
            ],
        ),
    );

    let json = serde_json::to_string(&unit).expect("serialize unit");
    let back: UnitResolution = serde_json::from_str(&json).expect("deserialize unit");
    assert_eq!(back, unit);
}
