use super::*;
use binname_resolve::{
    ClassKind, FunctionSymbol, ResolutionSnapshot, SymbolArena, TypeRef, UnitResolution,
};

fn function(symbols: &mut SymbolArena, name: &str, container: SymbolId) -> SymbolId {
    symbols.alloc_function(
        name,
        container,
        FunctionSymbol {
            receiver: None,
            parameters: Vec::new(),
            return_type: TypeRef::Unknown,
            sam_adapter_for: None,
        },
    )
}

#[test]
fn test_package_internal_name() {
    assert_eq!(package_internal_name(""), "");
    assert_eq!(package_internal_name("a"), "a");
    assert_eq!(package_internal_name("a.b.c"), "a/b/c");
}

#[test]
fn test_facade_short_name() {
    let options = AnnotateOptions::default();
    assert_eq!(facade_short_name("", &options), "_DefaultPackage");
    assert_eq!(facade_short_name("a.b", &options), "BPackage");
    assert_eq!(facade_short_name("util", &options), "UtilPackage");

    let custom = AnnotateOptions::default()
        .with_facade_suffix("Kt")
        .with_default_facade_name("Root");
    assert_eq!(facade_short_name("a.b", &custom), "BKt");
    assert_eq!(facade_short_name("", &custom), "Root");
}

#[test]
fn test_class_name_composition() {
    assert_eq!(&*class_name("", "Outer", true), "Outer");
    assert_eq!(&*class_name("a/b", "Outer", true), "a/b/Outer");
    assert_eq!(&*class_name("a/b/Outer", "Inner", false), "a/b/Outer$Inner");
}

#[test]
fn test_companion_name() {
    let options = AnnotateOptions::default();
    assert_eq!(&*companion_name("a/Outer", &options), "a/Outer$ClassObject$");
    let options = options.with_companion_suffix("$Companion");
    assert_eq!(&*companion_name("a/Outer", &options), "a/Outer$Companion");
}

#[test]
fn test_member_names() {
    let mut symbols = SymbolArena::new();
    let root = symbols.alloc_package("");
    let pkg = symbols.alloc_package("a.b");
    let class = symbols.alloc_class("Outer", pkg, ClassKind::Class);
    let method = function(&mut symbols, "run", class);
    let top = function(&mut symbols, "main", pkg);
    let root_fn = function(&mut symbols, "main", root);
    let local = function(&mut symbols, "helper", top);
    let unit = UnitResolution::new();
    let store = ResolutionSnapshot::new(&symbols, &unit);
    let options = AnnotateOptions::default();

    assert_eq!(
        member_name(&store, method, "a/b/Outer", &options).as_deref(),
        Some("a/b/Outer$run")
    );
    assert_eq!(
        member_name(&store, top, "a/b", &options).as_deref(),
        Some("a/b/BPackage$main")
    );
    assert_eq!(
        member_name(&store, root_fn, "", &options).as_deref(),
        Some("_DefaultPackage$main")
    );
    assert_eq!(member_name(&store, local, "a/b/BPackage$main", &options), None);
}
