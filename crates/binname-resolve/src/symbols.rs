//! Symbols produced by semantic analysis.
//!
//! Symbols are referenced by [`SymbolId`] and never copied by consumers.

use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const NONE: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl Default for SymbolId {
    fn default() -> Self {
        SymbolId::NONE
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("<none>")
        } else {
            write!(f, "s{}", self.0)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: Arc<str>,
    /// Containing declaration, `NONE` for the root package.
    pub container: SymbolId,
    pub data: SymbolData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolData {
    Package(PackageSymbol),
    Class(ClassSymbol),
    Function(FunctionSymbol),
    Property(PropertySymbol),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSymbol {
    /// Dotted name, empty for the root package.
    pub fq_name: Arc<str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    EnumEntry,
    Object,
    CompanionObject,
    Anonymous,
    Script,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSymbol {
    pub kind: ClassKind,
    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
    /// Holds a reference to the outer instance.
    #[serde(default)]
    pub is_inner: bool,
    /// Interface with exactly one abstract method that lambdas adapt to.
    #[serde(default)]
    pub is_sam_interface: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueParameter {
    pub name: Arc<str>,
    pub index: usize,
    pub ty: TypeRef,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSymbol {
    #[serde(default)]
    pub receiver: Option<TypeRef>,
    #[serde(default)]
    pub parameters: Vec<ValueParameter>,
    pub return_type: TypeRef,
    /// Set on synthesized SAM adapters: the function they adapt, whose
    /// parameters still carry the interface types.
    #[serde(default)]
    pub sam_adapter_for: Option<SymbolId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySymbol {
    pub ty: TypeRef,
}

impl Symbol {
    pub fn as_class(&self) -> Option<&ClassSymbol> {
        match &self.data {
            SymbolData::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSymbol> {
        match &self.data {
            SymbolData::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_package(&self) -> Option<&PackageSymbol> {
        match &self.data {
            SymbolData::Package(package) => Some(package),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self.data, SymbolData::Class(_))
    }

    pub fn is_package(&self) -> bool {
        matches!(self.data, SymbolData::Package(_))
    }
}

/// Flat storage for all symbols of a program.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> Self {
        SymbolArena::default()
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn alloc_package(&mut self, fq_name: &str) -> SymbolId {
        let short = fq_name.rsplit('.').next().unwrap_or_default();
        self.alloc(Symbol {
            name: Arc::from(short),
            container: SymbolId::NONE,
            data: SymbolData::Package(PackageSymbol {
                fq_name: Arc::from(fq_name),
            }),
        })
    }

    pub fn alloc_class(&mut self, name: &str, container: SymbolId, kind: ClassKind) -> SymbolId {
        self.alloc(Symbol {
            name: Arc::from(name),
            container,
            data: SymbolData::Class(ClassSymbol {
                kind,
                supertypes: Vec::new(),
                is_inner: false,
                is_sam_interface: false,
            }),
        })
    }

    pub fn alloc_function(
        &mut self,
        name: &str,
        container: SymbolId,
        function: FunctionSymbol,
    ) -> SymbolId {
        self.alloc(Symbol {
            name: Arc::from(name),
            container,
            data: SymbolData::Function(function),
        })
    }

    pub fn alloc_property(&mut self, name: &str, container: SymbolId, ty: TypeRef) -> SymbolId {
        self.alloc(Symbol {
            name: Arc::from(name),
            container,
            data: SymbolData::Property(PropertySymbol { ty }),
        })
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        if id.is_none() {
            None
        } else {
            self.symbols.get(id.0 as usize)
        }
    }

    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        if id.is_none() {
            None
        } else {
            self.symbols.get_mut(id.0 as usize)
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, id: SymbolId) -> bool {
        id.is_some() && (id.0 as usize) < self.symbols.len()
    }
}
