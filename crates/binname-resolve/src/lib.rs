//! Resolution snapshot contract for the binname pass.
//!
//! Semantic analysis runs upstream and leaves behind symbols and resolved
//! calls. This crate models that output as a frozen, read-only store:
//!
//! - `SymbolArena` / `SymbolId`: class, function, property and package symbols
//! - `TypeRef`: the small slice of the type system the pass looks at
//! - `ResolvedCall`: resulting descriptor plus argument-to-parameter mapping
//! - `ResolutionStore`: the read-only lookup trait the pass is written against
//! - `ClosureClassFactory`: the one write operation, creating synthetic
//!   closure classes, kept outside the shared snapshot

pub mod symbols;
pub use symbols::{
    ClassKind, ClassSymbol, FunctionSymbol, PackageSymbol, PropertySymbol, Symbol, SymbolArena,
    SymbolData, SymbolId, ValueParameter,
};

pub mod types;
pub use types::{FunctionTypeKind, FunctionTypeRef, TypeRef};

pub mod calls;
pub use calls::{ResolvedCall, ResolvedValueArgument};

pub mod closure_types;
pub use closure_types::{ClosureShape, closure_supertype};

pub mod store;
pub use store::{AnalysisMode, ClosureClassFactory, ResolutionStore};

pub mod snapshot;
pub use snapshot::{ResolutionSnapshot, SnapshotError, UnitResolution};

pub mod synthetic;
pub use synthetic::SyntheticClasses;
