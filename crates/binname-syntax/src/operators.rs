//! Binary operator tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Operator of a [`BinaryData`](crate::BinaryData) node.
///
/// Named infix calls (`a shl b`) keep their identifier in [`BinaryOperator::Infix`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mul,
    Div,
    Rem,
    RangeTo,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,
    AndAnd,
    OrOr,
    Elvis,
    In,
    NotIn,
    Assign,
    PlusAssign,
    MinusAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    Infix(Arc<str>),
}

impl BinaryOperator {
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Plus
                | BinaryOperator::Minus
                | BinaryOperator::Mul
                | BinaryOperator::Div
                | BinaryOperator::Rem
        )
    }

    /// `<`, `>`, `<=`, `>=`. Equality operators are not comparisons here.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Lt | BinaryOperator::Gt | BinaryOperator::LtEq | BinaryOperator::GtEq
        )
    }

    pub fn is_augmented_assignment(&self) -> bool {
        matches!(
            self,
            BinaryOperator::PlusAssign
                | BinaryOperator::MinusAssign
                | BinaryOperator::MulAssign
                | BinaryOperator::DivAssign
                | BinaryOperator::RemAssign
        )
    }

    pub fn is_membership(&self) -> bool {
        matches!(self, BinaryOperator::In | BinaryOperator::NotIn)
    }

    pub fn is_plain_assignment(&self) -> bool {
        matches!(self, BinaryOperator::Assign)
    }

    pub fn text(&self) -> &str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::RangeTo => "..",
            BinaryOperator::Lt => "<",
            BinaryOperator::Gt => ">",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::EqEq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::EqEqEq => "===",
            BinaryOperator::NotEqEq => "!==",
            BinaryOperator::AndAnd => "&&",
            BinaryOperator::OrOr => "||",
            BinaryOperator::Elvis => "?:",
            BinaryOperator::In => "in",
            BinaryOperator::NotIn => "!in",
            BinaryOperator::Assign => "=",
            BinaryOperator::PlusAssign => "+=",
            BinaryOperator::MinusAssign => "-=",
            BinaryOperator::MulAssign => "*=",
            BinaryOperator::DivAssign => "/=",
            BinaryOperator::RemAssign => "%=",
            BinaryOperator::Infix(name) => name,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
