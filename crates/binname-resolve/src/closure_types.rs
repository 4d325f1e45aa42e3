//! Closure supertype computation.
//!
//! A lambda or local function compiles to a class implementing a function
//! type of matching arity; a callable reference implements the reflective
//! reference type whose receiver depends on what is referenced.

use crate::store::ResolutionStore;
use crate::symbols::SymbolId;
use crate::types::{FunctionTypeKind, FunctionTypeRef, TypeRef};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClosureShape {
    /// Function literal or local named function.
    Literal,
    /// `::f`, `A::f`, `String::ext`.
    Reference,
}

/// `None` when `function` is not a function symbol.
pub fn closure_supertype<R>(store: &R, function: SymbolId, shape: ClosureShape) -> Option<TypeRef>
where
    R: ResolutionStore + ?Sized,
{
    let symbol = store.symbol(function)?;
    let descriptor = symbol.as_function()?;

    let (kind, receiver) = match (shape, &descriptor.receiver) {
        (ClosureShape::Literal, Some(receiver)) => {
            (FunctionTypeKind::ExtensionFunction, Some(receiver.clone()))
        }
        (ClosureShape::Literal, None) => (FunctionTypeKind::Function, None),
        (ClosureShape::Reference, Some(receiver)) => {
            (FunctionTypeKind::ExtensionReference, Some(receiver.clone()))
        }
        (ClosureShape::Reference, None) => match store.container(function) {
            Some(owner) if store.class(owner).is_some() => {
                (FunctionTypeKind::MemberReference, Some(TypeRef::class(owner)))
            }
            _ => (FunctionTypeKind::Reference, None),
        },
    };

    Some(TypeRef::Function(FunctionTypeRef {
        kind,
        receiver: receiver.map(Box::new),
        parameters: descriptor
            .parameters
            .iter()
            .map(|parameter| parameter.ty.clone())
            .collect(),
        return_type: Box::new(descriptor.return_type.clone()),
    }))
}
