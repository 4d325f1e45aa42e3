use super::*;

#[test]
fn test_display_with_node() {
    let diag = Diagnostic::error(
        "Outer.kt",
        Some(12),
        "naming context is empty",
        diagnostic_codes::EMPTY_NAMING_CONTEXT,
    );
    assert_eq!(
        diag.to_string(),
        "Outer.kt(node 12): error BN9001: naming context is empty"
    );
    assert!(diag.is_error());
}

#[test]
fn test_display_without_node() {
    let diag = Diagnostic::error(
        "a/b.kt",
        None,
        "naming stack left unbalanced",
        diagnostic_codes::UNBALANCED_NAMING_STACK,
    );
    assert_eq!(
        diag.to_string(),
        "a/b.kt: error BN9011: naming stack left unbalanced"
    );
}

#[test]
fn test_serializes_category_and_code() {
    let diag = Diagnostic::error("x.kt", Some(3), "boom", diagnostic_codes::MISSING_NODE);
    let json = serde_json::to_value(&diag).expect("serialize diagnostic");
    assert_eq!(json["category"], "Error");
    assert_eq!(json["code"], 9012);
    assert_eq!(json["node"], 3);
}
