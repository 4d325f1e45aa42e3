//! Diagnostic types for aborted compilation units.
//!
//! The annotating pass never reports user errors. Everything it can report is
//! an internal-invariant violation caused by an upstream phase, so a
//! diagnostic here always names the offending node and the broken invariant.

use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 3,
}

impl DiagnosticCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        }
    }
}

/// Stable numeric codes, printed as `BN<code>`.
pub mod diagnostic_codes {
    pub const EMPTY_NAMING_CONTEXT: u32 = 9001;
    pub const ILLEGAL_DECLARATION_SHAPE: u32 = 9002;
    pub const MISSING_RESOLUTION: u32 = 9003;
    pub const MALFORMED_ARGUMENT_MAPPING: u32 = 9004;
    pub const MISSING_ASSIGNMENT_RHS: u32 = 9005;
    pub const MISSING_OPERATOR_PARAMETER: u32 = 9006;
    pub const DUPLICATE_BINARY_NAME: u32 = 9007;
    pub const MISSING_ENUM_CLASS_NAME: u32 = 9008;
    pub const DUPLICATE_ANNOTATION: u32 = 9009;
    pub const DEPTH_LIMIT_EXCEEDED: u32 = 9010;
    pub const UNBALANCED_NAMING_STACK: u32 = 9011;
    pub const MISSING_NODE: u32 = 9012;
    pub const NOT_A_FUNCTION: u32 = 9013;
    /// Resolution snapshot failed validation before any pass ran.
    pub const MALFORMED_SNAPSHOT: u32 = 9100;
}

/// A diagnostic attached to one compilation unit.
///
/// `node` is the arena index of the offending node, or `None` when the
/// violation concerns the unit as a whole (for example an unbalanced naming
/// stack detected after the walk).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub node: Option<u32>,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        node: Option<u32>,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            node,
            message_text: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write!(f, "{}(node {node})", self.file)?,
            None => write!(f, "{}", self.file)?,
        }
        write!(
            f,
            ": {} BN{}: {}",
            self.category.as_str(),
            self.code,
            self.message_text
        )
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
