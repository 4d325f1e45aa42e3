//! Types as far as naming and SAM coercion need them.

use crate::symbols::SymbolId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRef {
    /// Class or interface type with its type arguments.
    Class {
        class: SymbolId,
        #[serde(default)]
        arguments: Vec<TypeRef>,
        #[serde(default)]
        nullable: bool,
    },
    Function(FunctionTypeRef),
    /// Type that failed to resolve upstream.
    Unknown,
}

/// Shape of a function type used as a closure supertype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionTypeKind {
    /// `(P) -> R`
    Function,
    /// `T.(P) -> R`
    ExtensionFunction,
    /// Reference to a top-level or local function.
    Reference,
    /// Reference to a class member; the receiver is the class.
    MemberReference,
    /// Reference to an extension function.
    ExtensionReference,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionTypeRef {
    pub kind: FunctionTypeKind,
    #[serde(default)]
    pub receiver: Option<Box<TypeRef>>,
    #[serde(default)]
    pub parameters: Vec<TypeRef>,
    pub return_type: Box<TypeRef>,
}

impl TypeRef {
    pub fn class(class: SymbolId) -> TypeRef {
        TypeRef::Class {
            class,
            arguments: Vec::new(),
            nullable: false,
        }
    }

    /// Declaring class of a class type.
    pub fn class_symbol(&self) -> Option<SymbolId> {
        match self {
            TypeRef::Class { class, .. } => Some(*class),
            TypeRef::Function(_) | TypeRef::Unknown => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionTypeRef> {
        match self {
            TypeRef::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Number of value parameters for function types, receiver included.
    pub fn function_arity(&self) -> Option<usize> {
        let function = self.as_function()?;
        Some(function.parameters.len() + usize::from(function.receiver.is_some()))
    }
}
