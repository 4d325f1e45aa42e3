//! Resolved declaration/expression tree for the binname pass.
//!
//! Nodes live in a [`NodeArena`] and are addressed by [`NodeIndex`]. The
//! tree is produced upstream and is read-only for every consumer in this
//! workspace; side tables keyed by `NodeIndex` carry all derived facts.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod node;
pub use node::{
    BinaryData, CallData, CallableReferenceData, ClassData, ClassDeclKind, EnumEntryData,
    FileData, FunctionData, FunctionLiteralData, IndexData, Node, NodeData, NodeKind, ObjectData,
    ObjectLiteralData, OtherData, PropertyData,
};

pub mod operators;
pub use operators::BinaryOperator;

pub mod arena;
pub use arena::{ExtendedNodeInfo, NodeArena};
