//! Units annotated in parallel against one shared snapshot produce the same
//! bindings as a sequential run.

mod support;

use binname_codegen::{AnnotateOptions, CodegenBindings, annotate_unit};
use binname_resolve::{ClassKind, ResolutionSnapshot, SymbolArena, SymbolId, UnitResolution};
use binname_syntax::{ClassDeclKind, NodeArena, NodeIndex};
use rayon::prelude::*;
use support::UnitBuilder;

struct Unit {
    arena: NodeArena,
    resolution: UnitResolution,
    root: NodeIndex,
}

/// `count` files, each with one class holding `count` nested lambdas.
fn program(count: usize) -> (SymbolArena, Vec<Unit>) {
    let mut b = UnitBuilder::new();
    let pkg = b.package("gen");
    let mut units = Vec::new();

    for file_index in 0..count {
        let class = b.class(&format!("C{file_index}"), pkg, ClassKind::Class);
        let mut arena = NodeArena::new();
        let mut resolution = UnitResolution::new();

        let mut body = Vec::new();
        for _ in 0..count {
            let outer_fn = b.lambda(class);
            let inner_fn = b.lambda(outer_fn);
            let inner = arena.add_function_literal(vec![]);
            let outer = arena.add_function_literal(vec![inner]);
            resolution.record_declaration(outer, outer_fn);
            resolution.record_declaration(inner, inner_fn);
            body.push(outer);
        }
        let init = arena.add_other("init", body);
        let class_node = arena.add_class(&format!("C{file_index}"), ClassDeclKind::Class, vec![], vec![init]);
        let root = arena.add_file(&format!("C{file_index}.kt"), "gen", false, vec![class_node]);
        resolution.record_declaration(class_node, class);
        units.push(Unit {
            arena,
            resolution,
            root,
        });
    }
    (b.symbols, units)
}

fn fingerprint(bindings: &CodegenBindings) -> Vec<(SymbolId, String)> {
    bindings
        .binary_names()
        .map(|(symbol, name)| (symbol, name.to_string()))
        .collect()
}

#[test]
fn test_parallel_units_match_sequential_run() {
    let (symbols, units) = program(12);
    let options = AnnotateOptions::default();

    let run = |unit: &Unit| {
        let store = ResolutionSnapshot::new(&symbols, &unit.resolution);
        let (output, _) = annotate_unit(&unit.arena, &store, unit.root, &options).unwrap();
        fingerprint(&output.bindings)
    };

    let sequential: Vec<_> = units.iter().map(run).collect();
    let parallel: Vec<_> = units.par_iter().map(run).collect();
    assert_eq!(sequential, parallel);

    let first = &sequential[0];
    assert!(first.iter().any(|(_, name)| name == "gen/C0$12$1"));
    // Every unit names its own class first.
    for (index, names) in sequential.iter().enumerate() {
        assert_eq!(names[0].1, format!("gen/C{index}"));
    }
}
