//! Internal-invariant violations.
//!
//! Each variant means an upstream phase handed the pass something that
//! cannot happen in a correct pipeline. The unit is aborted; nothing is
//! guessed around.

use binname_common::{Diagnostic, diagnostic_codes};
use binname_resolve::SymbolId;
use binname_syntax::{NodeIndex, NodeKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    #[error("naming context is empty")]
    EmptyContext,

    #[error("{kind} at node {node} cannot receive an invented anonymous class name")]
    IllegalDeclarationShape { node: NodeIndex, kind: NodeKind },

    #[error("{kind} at node {node} has no resolved symbol although analysis is complete")]
    MissingResolution { node: NodeIndex, kind: NodeKind },

    #[error("symbol {symbol} resolved for node {node} is not a function")]
    NotAFunction { node: NodeIndex, symbol: SymbolId },

    #[error("resolved call at node {node} binds no argument expression to parameter #{parameter}")]
    MalformedArgumentMapping { node: NodeIndex, parameter: usize },

    #[error("setter call at node {node} is not the target of an assignment with a right-hand side")]
    MissingAssignmentRhs { node: NodeIndex },

    #[error("operator at node {node} resolved to function {symbol} without parameters")]
    MissingOperatorParameter { node: NodeIndex, symbol: SymbolId },

    #[error("binary name `{name}` for symbol {symbol} at node {node} is already used by symbol {existing}")]
    DuplicateBinaryName {
        node: NodeIndex,
        name: String,
        symbol: SymbolId,
        existing: SymbolId,
    },

    #[error("enum entry at node {node} has no enclosing enum class with a binary name")]
    MissingEnumClassName { node: NodeIndex },

    #[error("node {node} already carries a {what}")]
    DuplicateAnnotation { node: NodeIndex, what: &'static str },

    #[error("nesting at node {node} exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { node: NodeIndex, limit: u32 },

    #[error("naming stack left unbalanced with {depth} frame(s)")]
    UnbalancedNamingStack { depth: usize },

    #[error("node {node} is not part of the arena")]
    MissingNode { node: NodeIndex },
}

impl AnnotationError {
    pub fn code(&self) -> u32 {
        match self {
            AnnotationError::EmptyContext => diagnostic_codes::EMPTY_NAMING_CONTEXT,
            AnnotationError::IllegalDeclarationShape { .. } => {
                diagnostic_codes::ILLEGAL_DECLARATION_SHAPE
            }
            AnnotationError::MissingResolution { .. } => diagnostic_codes::MISSING_RESOLUTION,
            AnnotationError::NotAFunction { .. } => diagnostic_codes::NOT_A_FUNCTION,
            AnnotationError::MalformedArgumentMapping { .. } => {
                diagnostic_codes::MALFORMED_ARGUMENT_MAPPING
            }
            AnnotationError::MissingAssignmentRhs { .. } => diagnostic_codes::MISSING_ASSIGNMENT_RHS,
            AnnotationError::MissingOperatorParameter { .. } => {
                diagnostic_codes::MISSING_OPERATOR_PARAMETER
            }
            AnnotationError::DuplicateBinaryName { .. } => diagnostic_codes::DUPLICATE_BINARY_NAME,
            AnnotationError::MissingEnumClassName { .. } => {
                diagnostic_codes::MISSING_ENUM_CLASS_NAME
            }
            AnnotationError::DuplicateAnnotation { .. } => diagnostic_codes::DUPLICATE_ANNOTATION,
            AnnotationError::DepthLimitExceeded { .. } => diagnostic_codes::DEPTH_LIMIT_EXCEEDED,
            AnnotationError::UnbalancedNamingStack { .. } => {
                diagnostic_codes::UNBALANCED_NAMING_STACK
            }
            AnnotationError::MissingNode { .. } => diagnostic_codes::MISSING_NODE,
        }
    }

    /// Offending node, when the violation is tied to one.
    pub fn node(&self) -> Option<NodeIndex> {
        match self {
            AnnotationError::EmptyContext | AnnotationError::UnbalancedNamingStack { .. } => None,
            AnnotationError::IllegalDeclarationShape { node, .. }
            | AnnotationError::MissingResolution { node, .. }
            | AnnotationError::NotAFunction { node, .. }
            | AnnotationError::MalformedArgumentMapping { node, .. }
            | AnnotationError::MissingAssignmentRhs { node }
            | AnnotationError::MissingOperatorParameter { node, .. }
            | AnnotationError::DuplicateBinaryName { node, .. }
            | AnnotationError::MissingEnumClassName { node }
            | AnnotationError::DuplicateAnnotation { node, .. }
            | AnnotationError::DepthLimitExceeded { node, .. }
            | AnnotationError::MissingNode { node } => Some(*node),
        }
    }

    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        Diagnostic::error(
            file,
            self.node().filter(|node| node.is_some()).map(|node| node.0),
            self.to_string(),
            self.code(),
        )
    }
}

pub type AnnotateResult<T> = Result<T, AnnotationError>;
