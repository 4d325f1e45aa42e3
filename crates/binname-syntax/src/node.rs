//! Node kinds of the resolved declaration/expression tree.
//!
//! The set of kinds is closed: every consumer matches on [`NodeData`]
//! exhaustively, so adding a kind is a compile error at each traversal
//! until it is handled.

use crate::base::{NodeIndex, NodeList};
use crate::operators::BinaryOperator;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A node in the arena: its payload plus nothing else.
///
/// Parent links live in [`ExtendedNodeInfo`](crate::ExtendedNodeInfo).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub data: NodeData,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.data.kind()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeData {
    File(FileData),
    Class(ClassData),
    Object(ObjectData),
    CompanionObject(ObjectData),
    EnumEntry(EnumEntryData),
    Property(PropertyData),
    NamedFunction(FunctionData),
    FunctionLiteral(FunctionLiteralData),
    ObjectLiteral(ObjectLiteralData),
    CallableReference(CallableReferenceData),
    Call(CallData),
    Binary(BinaryData),
    Index(IndexData),
    Other(OtherData),
}

/// Compilation unit root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileData {
    pub file_name: Arc<str>,
    /// Dotted package name, empty for the root package.
    pub package: Arc<str>,
    pub is_script: bool,
    pub declarations: NodeList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassDeclKind {
    Class,
    Interface,
    EnumClass,
    AnnotationClass,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassData {
    pub name: Arc<str>,
    pub decl_kind: ClassDeclKind,
    /// Delegation specifiers (super constructor calls, delegates).
    pub heritage: NodeList,
    pub members: NodeList,
}

/// Named object declaration, also used for companion objects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectData {
    /// `None` for an unnamed companion object.
    pub name: Option<Arc<str>>,
    pub heritage: NodeList,
    pub members: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntryData {
    pub name: Arc<str>,
    /// Constructor arguments of the entry, `A(1, { ... })`.
    pub arguments: NodeList,
    pub members: NodeList,
}

impl EnumEntryData {
    /// An entry without a body of its own shares the enum class.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyData {
    pub name: Arc<str>,
    pub initializer: NodeIndex,
    /// Getter/setter bodies and delegate expression.
    pub accessors: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionData {
    pub name: Arc<str>,
    /// Parameter default values, in declaration order.
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionLiteralData {
    pub parameters: NodeList,
    pub body: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLiteralData {
    pub heritage: NodeList,
    pub members: NodeList,
}

/// `receiver::callee`; `receiver` is `NONE` for `::callee`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableReferenceData {
    pub receiver: NodeIndex,
    pub callee: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallData {
    pub callee: NodeIndex,
    /// Value arguments in source order, trailing lambda last.
    pub arguments: NodeList,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryData {
    pub left: NodeIndex,
    pub operator: BinaryOperator,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexData {
    pub receiver: NodeIndex,
    pub indices: NodeList,
}

/// Any node the pass has no specific rule for: blocks, identifiers,
/// literals, control flow. Only its children matter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherData {
    pub label: Arc<str>,
    pub children: NodeList,
}

/// Payload-free discriminant of [`NodeData`], for logging and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Class,
    Object,
    CompanionObject,
    EnumEntry,
    Property,
    NamedFunction,
    FunctionLiteral,
    ObjectLiteral,
    CallableReference,
    Call,
    Binary,
    Index,
    Other,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Class => "class",
            NodeKind::Object => "object declaration",
            NodeKind::CompanionObject => "companion object",
            NodeKind::EnumEntry => "enum entry",
            NodeKind::Property => "property",
            NodeKind::NamedFunction => "named function",
            NodeKind::FunctionLiteral => "function literal",
            NodeKind::ObjectLiteral => "object literal",
            NodeKind::CallableReference => "callable reference",
            NodeKind::Call => "call expression",
            NodeKind::Binary => "binary expression",
            NodeKind::Index => "index expression",
            NodeKind::Other => "node",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::File(_) => NodeKind::File,
            NodeData::Class(_) => NodeKind::Class,
            NodeData::Object(_) => NodeKind::Object,
            NodeData::CompanionObject(_) => NodeKind::CompanionObject,
            NodeData::EnumEntry(_) => NodeKind::EnumEntry,
            NodeData::Property(_) => NodeKind::Property,
            NodeData::NamedFunction(_) => NodeKind::NamedFunction,
            NodeData::FunctionLiteral(_) => NodeKind::FunctionLiteral,
            NodeData::ObjectLiteral(_) => NodeKind::ObjectLiteral,
            NodeData::CallableReference(_) => NodeKind::CallableReference,
            NodeData::Call(_) => NodeKind::Call,
            NodeData::Binary(_) => NodeKind::Binary,
            NodeData::Index(_) => NodeKind::Index,
            NodeData::Other(_) => NodeKind::Other,
        }
    }

    /// Children in lexical order, with `NONE` slots dropped.
    pub fn children(&self) -> SmallVec<[NodeIndex; 8]> {
        fn push_list(out: &mut SmallVec<[NodeIndex; 8]>, list: &NodeList) {
            out.extend(list.iter().filter(|idx| idx.is_some()));
        }

        let mut out = SmallVec::new();
        match self {
            NodeData::File(file) => push_list(&mut out, &file.declarations),
            NodeData::Class(class) => {
                push_list(&mut out, &class.heritage);
                push_list(&mut out, &class.members);
            }
            NodeData::Object(object) | NodeData::CompanionObject(object) => {
                push_list(&mut out, &object.heritage);
                push_list(&mut out, &object.members);
            }
            NodeData::EnumEntry(entry) => {
                push_list(&mut out, &entry.arguments);
                push_list(&mut out, &entry.members);
            }
            NodeData::Property(prop) => {
                out.extend(prop.initializer.into_option());
                push_list(&mut out, &prop.accessors);
            }
            NodeData::NamedFunction(func) => {
                push_list(&mut out, &func.parameters);
                out.extend(func.body.into_option());
            }
            NodeData::FunctionLiteral(lambda) => {
                push_list(&mut out, &lambda.parameters);
                push_list(&mut out, &lambda.body);
            }
            NodeData::ObjectLiteral(object) => {
                push_list(&mut out, &object.heritage);
                push_list(&mut out, &object.members);
            }
            NodeData::CallableReference(reference) => {
                out.extend(reference.receiver.into_option());
                out.extend(reference.callee.into_option());
            }
            NodeData::Call(call) => {
                out.extend(call.callee.into_option());
                push_list(&mut out, &call.arguments);
            }
            NodeData::Binary(binary) => {
                out.extend(binary.left.into_option());
                out.extend(binary.right.into_option());
            }
            NodeData::Index(index) => {
                out.extend(index.receiver.into_option());
                push_list(&mut out, &index.indices);
            }
            NodeData::Other(other) => push_list(&mut out, &other.children),
        }
        out
    }
}
