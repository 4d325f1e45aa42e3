use super::*;
use binname_resolve::{ClassKind, TypeRef};

#[path = "support/mod.rs"]
mod support;
use support::UnitBuilder;

fn request(node: u32, class: SymbolId, name: &str) -> ClosureRequest {
    ClosureRequest {
        node: NodeIndex(node),
        class,
        enclosing: None,
        container: None,
        binary_name: Arc::from(name),
        is_function_literal: false,
    }
}

#[test]
fn test_second_record_for_node_is_rejected() {
    let mut b = UnitBuilder::new();
    let root = b.package("");
    let a = b.class("A", root, ClassKind::Class);
    let store = b.snapshot();
    let recorder = ClosureRecorder::new(&store, true);
    let mut bindings = CodegenBindings::new();

    recorder.record(&mut bindings, request(1, a, "A")).unwrap();
    assert_eq!(
        recorder.record(&mut bindings, request(1, a, "A")),
        Err(AnnotationError::DuplicateAnnotation {
            node: NodeIndex(1),
            what: "closure record"
        })
    );
}

#[test]
fn test_inner_class_flags() {
    let mut b = UnitBuilder::new();
    let root = b.package("");
    let outer = b.class("Outer", root, ClassKind::Class);
    let inner = b.inner_class("Inner", outer);
    let extension = b.extension_function("ext", root, TypeRef::class(outer), vec![]);
    let local = b.class("Local", extension, ClassKind::Class);
    let store = b.snapshot();
    let recorder = ClosureRecorder::new(&store, true);
    let mut bindings = CodegenBindings::new();

    let mut inner_request = request(2, inner, "Outer$Inner");
    inner_request.enclosing = Some(outer);
    inner_request.container = Some(outer);
    recorder.record(&mut bindings, inner_request).unwrap();

    let mut local_request = request(3, local, "_DefaultPackage$ext$1");
    local_request.enclosing = None;
    local_request.container = Some(extension);
    recorder.record(&mut bindings, local_request).unwrap();

    let inner_record = bindings.closure(NodeIndex(2)).unwrap();
    assert!(inner_record.captures_this);
    assert_eq!(inner_record.enclosing_receiver, None);
    assert_eq!(bindings.inner_classes(outer), &[inner]);

    let local_record = bindings.closure(NodeIndex(3)).unwrap();
    assert!(!local_record.captures_this);
    assert_eq!(local_record.enclosing_receiver, Some(extension));
}

#[test]
fn test_function_literals_are_not_inner_classes() {
    let mut b = UnitBuilder::new();
    let root = b.package("");
    let outer = b.class("Outer", root, ClassKind::Class);
    let closure = b.class("<closure>", outer, ClassKind::Anonymous);
    let store = b.snapshot();
    let recorder = ClosureRecorder::new(&store, true);
    let mut bindings = CodegenBindings::new();

    let mut lambda = request(4, closure, "Outer$1");
    lambda.enclosing = Some(outer);
    lambda.is_function_literal = true;
    recorder.record(&mut bindings, lambda).unwrap();

    assert!(bindings.inner_classes(outer).is_empty());
    assert_eq!(bindings.binary_name(closure).map(|n| &**n), Some("Outer$1"));
}
