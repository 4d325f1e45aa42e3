use super::*;

#[test]
fn test_inputs_are_required() {
    assert!(CliArgs::try_parse_from(["binname"]).is_err());
}

#[test]
fn test_flags() {
    let args = CliArgs::try_parse_from([
        "binname",
        "--partial",
        "--pretty",
        "-j",
        "4",
        "--options",
        "opts.json",
        "a.json",
        "b.json",
    ])
    .unwrap();
    assert!(args.partial);
    assert!(args.pretty);
    assert_eq!(args.jobs, Some(4));
    assert_eq!(args.options, Some(PathBuf::from("opts.json")));
    assert_eq!(args.inputs, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
}
