//! Binary name composition.
//!
//! Internal names use `/` between package segments and `$` between a class
//! and anything nested in it: `a/b/Outer$Inner`, `a/b/BPackage$main`.

use crate::options::AnnotateOptions;
use binname_resolve::{ResolutionStore, SymbolData, SymbolId};
use std::sync::Arc;

/// `a.b.c` -> `a/b/c`; the root package stays empty.
pub fn package_internal_name(fq_name: &str) -> String {
    fq_name.replace('.', "/")
}

pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short name of the facade class holding a package's top-level members.
pub fn facade_short_name(fq_name: &str, options: &AnnotateOptions) -> String {
    match fq_name.rsplit('.').next() {
        Some(last) if !fq_name.is_empty() => {
            format!("{}{}", capitalize(last), options.facade_suffix)
        }
        _ => options.default_facade_name.clone(),
    }
}

/// Name of a named class-like declaration under `base`.
pub fn class_name(base: &str, simple: &str, top_level: bool) -> Arc<str> {
    if !top_level {
        Arc::from(format!("{base}${simple}"))
    } else if base.is_empty() {
        Arc::from(simple)
    } else {
        Arc::from(format!("{base}/{simple}"))
    }
}

pub fn companion_name(base: &str, options: &AnnotateOptions) -> Arc<str> {
    Arc::from(format!("{base}{}", options.companion_suffix))
}

/// Frame name of a function or property declared in a class or package.
///
/// `None` for local declarations (container is a function or nothing).
pub fn member_name<R>(
    store: &R,
    member: SymbolId,
    base: &str,
    options: &AnnotateOptions,
) -> Option<Arc<str>>
where
    R: ResolutionStore + ?Sized,
{
    let symbol = store.symbol(member)?;
    let container = store.symbol(symbol.container)?;
    match &container.data {
        SymbolData::Class(_) => Some(Arc::from(format!("{base}${}", symbol.name))),
        SymbolData::Package(package) => {
            let facade = facade_short_name(&package.fq_name, options);
            let owner = if base.is_empty() {
                facade
            } else {
                format!("{base}/{facade}")
            };
            Some(Arc::from(format!("{owner}${}", symbol.name)))
        }
        SymbolData::Function(_) | SymbolData::Property(_) => None,
    }
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;
