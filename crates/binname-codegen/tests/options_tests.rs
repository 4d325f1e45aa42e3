use super::*;

#[test]
fn test_missing_fields_take_defaults() {
    let options: AnnotateOptions =
        serde_json::from_str(r#"{ "companionSuffix": "$Companion" }"#).unwrap();
    assert_eq!(
        options,
        AnnotateOptions::default().with_companion_suffix("$Companion")
    );
}

#[test]
fn test_fields_use_camel_case() {
    let options = AnnotateOptions::default()
        .with_unique_name_check(false)
        .with_max_depth(64);
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json["checkUniqueNames"], false);
    assert_eq!(json["maxDepth"], 64);
    assert_eq!(json["defaultFacadeName"], DEFAULT_PACKAGE_FACADE_NAME);

    let back: AnnotateOptions = serde_json::from_value(json).unwrap();
    assert_eq!(back, options);
}
