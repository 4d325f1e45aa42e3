//! JSON report of the bindings produced for each unit.

use binname_codegen::{AnnotateOutput, AnnotateStats};
use binname_common::Diagnostic;
use binname_resolve::{SymbolId, SyntheticClasses, TypeRef};
use binname_syntax::NodeIndex;
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramReport {
    pub input: String,
    pub units: Vec<UnitReport>,
    pub error_count: usize,
}

impl ProgramReport {
    pub fn new(input: String, units: Vec<UnitReport>) -> Self {
        let error_count = units
            .iter()
            .flat_map(|unit| &unit.diagnostics)
            .filter(|diagnostic| diagnostic.is_error())
            .count();
        ProgramReport {
            input,
            units,
            error_count,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitReport {
    pub file_name: String,
    pub binary_names: Vec<NameEntry>,
    pub closures: Vec<ClosureEntry>,
    pub class_for_function: Vec<ClassForFunctionEntry>,
    pub enum_entries_needing_subclass: Vec<SymbolId>,
    pub inner_classes: Vec<InnerClassesEntry>,
    pub sam_values: Vec<SamEntry>,
    pub synthetic_classes: Vec<SyntheticEntry>,
    pub stats: Option<AnnotateStats>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NameEntry {
    pub symbol: SymbolId,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureEntry {
    pub node: NodeIndex,
    pub class: SymbolId,
    pub enclosing: Option<SymbolId>,
    pub binary_name: String,
    pub is_function_literal: bool,
    pub captures_this: bool,
    pub enclosing_receiver: Option<SymbolId>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ClassForFunctionEntry {
    pub function: SymbolId,
    pub class: SymbolId,
}

#[derive(Clone, Debug, Serialize)]
pub struct InnerClassesEntry {
    pub outer: SymbolId,
    pub inner: Vec<SymbolId>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SamEntry {
    pub argument: NodeIndex,
    pub interface: SymbolId,
}

#[derive(Clone, Debug, Serialize)]
pub struct SyntheticEntry {
    pub class: SymbolId,
    pub function: Option<SymbolId>,
    pub container: SymbolId,
    pub supertype: Option<TypeRef>,
}

impl UnitReport {
    pub fn annotated(file_name: &str, output: &AnnotateOutput, synthetic: &SyntheticClasses) -> Self {
        let bindings = &output.bindings;
        UnitReport {
            file_name: file_name.to_string(),
            binary_names: bindings
                .binary_names()
                .map(|(symbol, name)| NameEntry {
                    symbol,
                    name: name.to_string(),
                })
                .collect(),
            closures: bindings
                .closures()
                .map(|(node, record)| ClosureEntry {
                    node,
                    class: record.class,
                    enclosing: record.enclosing,
                    binary_name: record.binary_name.to_string(),
                    is_function_literal: record.is_function_literal,
                    captures_this: record.captures_this,
                    enclosing_receiver: record.enclosing_receiver,
                })
                .collect(),
            class_for_function: bindings
                .classes_for_functions()
                .map(|(function, class)| ClassForFunctionEntry { function, class })
                .collect(),
            enum_entries_needing_subclass: bindings.enum_entries_needing_subclass().collect(),
            inner_classes: bindings
                .all_inner_classes()
                .map(|(outer, inner)| InnerClassesEntry {
                    outer,
                    inner: inner.to_vec(),
                })
                .collect(),
            sam_values: bindings
                .sam_values()
                .map(|annotation| SamEntry {
                    argument: annotation.argument,
                    interface: annotation.interface,
                })
                .collect(),
            synthetic_classes: synthetic
                .iter()
                .map(|(class, symbol)| SyntheticEntry {
                    class,
                    function: synthetic.function_of(class),
                    container: symbol.container,
                    supertype: symbol
                        .as_class()
                        .and_then(|data| data.supertypes.first().cloned()),
                })
                .collect(),
            stats: Some(output.stats),
            diagnostics: Vec::new(),
        }
    }

    /// A unit that produced no bindings.
    pub fn failed(file_name: &str, diagnostic: Diagnostic) -> Self {
        UnitReport {
            file_name: file_name.to_string(),
            diagnostics: vec![diagnostic],
            ..UnitReport::default()
        }
    }
}
