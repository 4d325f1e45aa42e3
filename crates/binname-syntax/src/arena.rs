//! NodeArena: storage, access and creation (`add_*`) methods.
//!
//! Nodes are appended bottom-up: children first, then the parent that lists
//! them. Adding a parent fills in the parent link of each child, so after
//! the root is added every reachable node knows its parent.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use crate::operators::BinaryOperator;
use binname_common::limits::MAX_NODE_PREALLOC;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-node information that is not part of the payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

/// Serialized as the plain node list; parent links are rebuilt on load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Node>", into = "Vec<Node>")]
pub struct NodeArena {
    nodes: Vec<Node>,
    extended_info: Vec<ExtendedNodeInfo>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(safe_capacity),
            extended_info: Vec::with_capacity(safe_capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of `index`, or `NONE` for the root and unknown nodes.
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |ext| ext.parent)
    }

    pub fn kind(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(Node::kind)
    }

    pub fn get_binary(&self, index: NodeIndex) -> Option<&BinaryData> {
        match &self.get(index)?.data {
            NodeData::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    /// Append a node and link its children back to it.
    pub fn add_node(&mut self, data: NodeData) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        for child in data.children() {
            if let Some(ext) = self.extended_info.get_mut(child.0 as usize) {
                ext.parent = index;
            }
        }
        self.nodes.push(Node { data });
        self.extended_info.push(ExtendedNodeInfo::default());
        index
    }

    pub fn add_file(
        &mut self,
        file_name: &str,
        package: &str,
        is_script: bool,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(NodeData::File(FileData {
            file_name: Arc::from(file_name),
            package: Arc::from(package),
            is_script,
            declarations: declarations.into(),
        }))
    }

    pub fn add_class(
        &mut self,
        name: &str,
        decl_kind: ClassDeclKind,
        heritage: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(NodeData::Class(ClassData {
            name: Arc::from(name),
            decl_kind,
            heritage: heritage.into(),
            members: members.into(),
        }))
    }

    pub fn add_object(&mut self, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::Object(ObjectData {
            name: Some(Arc::from(name)),
            heritage: NodeList::new(),
            members: members.into(),
        }))
    }

    pub fn add_companion_object(&mut self, name: Option<&str>, members: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::CompanionObject(ObjectData {
            name: name.map(Arc::from),
            heritage: NodeList::new(),
            members: members.into(),
        }))
    }

    pub fn add_enum_entry(
        &mut self,
        name: &str,
        arguments: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(NodeData::EnumEntry(EnumEntryData {
            name: Arc::from(name),
            arguments: arguments.into(),
            members: members.into(),
        }))
    }

    pub fn add_property(
        &mut self,
        name: &str,
        initializer: NodeIndex,
        accessors: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(NodeData::Property(PropertyData {
            name: Arc::from(name),
            initializer,
            accessors: accessors.into(),
        }))
    }

    pub fn add_function(
        &mut self,
        name: &str,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.add_node(NodeData::NamedFunction(FunctionData {
            name: Arc::from(name),
            parameters: parameters.into(),
            body,
        }))
    }

    pub fn add_function_literal(&mut self, body: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::FunctionLiteral(FunctionLiteralData {
            parameters: NodeList::new(),
            body: body.into(),
        }))
    }

    pub fn add_object_literal(&mut self, heritage: Vec<NodeIndex>, members: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::ObjectLiteral(ObjectLiteralData {
            heritage: heritage.into(),
            members: members.into(),
        }))
    }

    pub fn add_callable_reference(&mut self, receiver: NodeIndex, callee: NodeIndex) -> NodeIndex {
        self.add_node(NodeData::CallableReference(CallableReferenceData {
            receiver,
            callee,
        }))
    }

    pub fn add_call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::Call(CallData {
            callee,
            arguments: arguments.into(),
        }))
    }

    pub fn add_binary(
        &mut self,
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(NodeData::Binary(BinaryData {
            left,
            operator,
            right,
        }))
    }

    pub fn add_index(&mut self, receiver: NodeIndex, indices: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::Index(IndexData {
            receiver,
            indices: indices.into(),
        }))
    }

    pub fn add_other(&mut self, label: &str, children: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(NodeData::Other(OtherData {
            label: Arc::from(label),
            children: children.into(),
        }))
    }

    /// Leaf node such as an identifier or literal.
    pub fn add_leaf(&mut self, label: &str) -> NodeIndex {
        self.add_other(label, Vec::new())
    }
}

impl From<Vec<Node>> for NodeArena {
    fn from(nodes: Vec<Node>) -> Self {
        let mut extended_info = vec![ExtendedNodeInfo::default(); nodes.len()];
        for (index, node) in nodes.iter().enumerate() {
            for child in node.data.children() {
                if let Some(ext) = extended_info.get_mut(child.0 as usize) {
                    ext.parent = NodeIndex(index as u32);
                }
            }
        }
        NodeArena {
            nodes,
            extended_info,
        }
    }
}

impl From<NodeArena> for Vec<Node> {
    fn from(arena: NodeArena) -> Self {
        arena.nodes
    }
}

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod tests;
