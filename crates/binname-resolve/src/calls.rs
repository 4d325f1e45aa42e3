//! Resolved calls.

use crate::symbols::SymbolId;
use binname_syntax::NodeIndex;
use serde::{Deserialize, Serialize};

/// Argument bound to one declared parameter of the resulting descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedValueArgument {
    Expression(NodeIndex),
    /// Parameter left to its default value.
    Default,
    Vararg(Vec<NodeIndex>),
}

impl ResolvedValueArgument {
    /// The single argument expression, if this is one.
    pub fn expression(&self) -> Option<NodeIndex> {
        match self {
            ResolvedValueArgument::Expression(expr) => expr.into_option(),
            ResolvedValueArgument::Default | ResolvedValueArgument::Vararg(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCall {
    pub resulting_descriptor: SymbolId,
    /// Indexed by declared parameter index of `resulting_descriptor`.
    #[serde(default)]
    pub value_arguments: Vec<ResolvedValueArgument>,
}

impl ResolvedCall {
    pub fn new(resulting_descriptor: SymbolId, value_arguments: Vec<ResolvedValueArgument>) -> Self {
        ResolvedCall {
            resulting_descriptor,
            value_arguments,
        }
    }

    pub fn argument_for(&self, parameter_index: usize) -> Option<&ResolvedValueArgument> {
        self.value_arguments.get(parameter_index)
    }
}
