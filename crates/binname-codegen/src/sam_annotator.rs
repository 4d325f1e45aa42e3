//! SAM-adapter detection on calls, binary operators and index expressions.
//!
//! When a call resolves to a synthesized SAM adapter, code generation has
//! to wrap each lambda passed for a functional-interface parameter into an
//! instance of that interface. The annotator finds those argument
//! expressions; it never decides anything about the call itself.

use crate::bindings::SamAnnotation;
use crate::error::{AnnotateResult, AnnotationError};
use binname_resolve::{FunctionSymbol, ResolutionStore, SymbolId};
use binname_syntax::{BinaryData, BinaryOperator, IndexData, NodeArena, NodeIndex};
use smallvec::SmallVec;

pub type SamAnnotations = SmallVec<[SamAnnotation; 2]>;

/// Name of the accessor whose last parameter is the assigned value.
const SETTER_NAME: &str = "set";

/// Which operand of a binary expression is passed as the first parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamOperand {
    Left,
    Right,
}

impl SamOperand {
    pub fn for_operator(operator: &BinaryOperator) -> Option<SamOperand> {
        if operator.is_membership() {
            Some(SamOperand::Left)
        } else if operator.is_arithmetic()
            || operator.is_comparison()
            || operator.is_augmented_assignment()
            || matches!(operator, BinaryOperator::RangeTo | BinaryOperator::Infix(_))
        {
            Some(SamOperand::Right)
        } else {
            None
        }
    }
}

pub struct SamAnnotator<'a, R: ResolutionStore + ?Sized> {
    arena: &'a NodeArena,
    store: &'a R,
}

impl<'a, R: ResolutionStore + ?Sized> SamAnnotator<'a, R> {
    pub fn new(arena: &'a NodeArena, store: &'a R) -> Self {
        SamAnnotator { arena, store }
    }

    pub fn annotate_call(&self, node: NodeIndex) -> AnnotateResult<SamAnnotations> {
        let mut out = SamAnnotations::new();
        let Some(call) = self.store.resolved_call(node) else {
            return Ok(out);
        };
        // Property and variable reads resolve too; only functions adapt.
        if self.store.function(call.resulting_descriptor).is_none() {
            return Ok(out);
        }
        let Some((_, function)) = self.original_adapter(node, call.resulting_descriptor)? else {
            return Ok(out);
        };

        for parameter in &function.parameters {
            let Some(interface) = self.store.sam_interface(&parameter.ty) else {
                continue;
            };
            let argument = call
                .argument_for(parameter.index)
                .and_then(|argument| argument.expression())
                .ok_or(AnnotationError::MalformedArgumentMapping {
                    node,
                    parameter: parameter.index,
                })?;
            out.push(SamAnnotation {
                argument,
                interface,
            });
        }
        Ok(out)
    }

    pub fn annotate_binary(
        &self,
        node: NodeIndex,
        binary: &BinaryData,
    ) -> AnnotateResult<SamAnnotations> {
        let mut out = SamAnnotations::new();
        let Some(target) = self.store.reference_target(node) else {
            return Ok(out);
        };
        if self.store.function(target).is_none() {
            return Err(AnnotationError::NotAFunction {
                node,
                symbol: target,
            });
        }
        let Some((original, function)) = self.original_adapter(node, target)? else {
            return Ok(out);
        };
        let first = function
            .parameters
            .first()
            .ok_or(AnnotationError::MissingOperatorParameter {
                node,
                symbol: original,
            })?;
        let Some(interface) = self.store.sam_interface(&first.ty) else {
            return Ok(out);
        };

        let operand = match SamOperand::for_operator(&binary.operator) {
            Some(SamOperand::Right) => binary.right,
            Some(SamOperand::Left) => binary.left,
            None => return Ok(out),
        };
        if operand.is_none() {
            return Err(AnnotationError::MissingNode { node: operand });
        }
        out.push(SamAnnotation {
            argument: operand,
            interface,
        });
        Ok(out)
    }

    pub fn annotate_index(
        &self,
        node: NodeIndex,
        index: &IndexData,
    ) -> AnnotateResult<SamAnnotations> {
        let mut out = SamAnnotations::new();
        let Some(target) = self.store.reference_target(node) else {
            return Ok(out);
        };
        let Some(accessor) = self.store.symbol(target) else {
            return Ok(out);
        };
        let is_setter = &*accessor.name == SETTER_NAME;
        let Some((_, function)) = self.original_adapter(node, target)? else {
            return Ok(out);
        };

        let last = function.parameters.len().saturating_sub(1);
        for parameter in &function.parameters {
            let Some(interface) = self.store.sam_interface(&parameter.ty) else {
                continue;
            };
            let argument = if is_setter && parameter.index == last {
                // Only a plain `=` hands its right-hand side to the setter.
                match self.assigned_value(node)? {
                    Some(value) => value,
                    None => continue,
                }
            } else {
                index
                    .indices
                    .get(parameter.index)
                    .filter(|expr| expr.is_some())
                    .ok_or(AnnotationError::MalformedArgumentMapping {
                        node,
                        parameter: parameter.index,
                    })?
            };
            out.push(SamAnnotation {
                argument,
                interface,
            });
        }
        Ok(out)
    }

    /// Original function of a SAM adapter, `None` when `function` is not one.
    fn original_adapter(
        &self,
        node: NodeIndex,
        function: SymbolId,
    ) -> AnnotateResult<Option<(SymbolId, &'a FunctionSymbol)>> {
        let Some(original) = self.store.original_if_sam_adapter(function) else {
            return Ok(None);
        };
        let descriptor = self
            .store
            .function(original)
            .ok_or(AnnotationError::NotAFunction {
                node,
                symbol: original,
            })?;
        Ok(Some((original, descriptor)))
    }

    /// Right-hand side of the `=` whose target is the index expression, or
    /// `None` when the index expression is not the target of a plain `=`.
    fn assigned_value(&self, node: NodeIndex) -> AnnotateResult<Option<NodeIndex>> {
        let parent = self.arena.parent(node);
        match self.arena.get_binary(parent) {
            Some(assign) if assign.operator.is_plain_assignment() && assign.left == node => assign
                .right
                .into_option()
                .map(Some)
                .ok_or(AnnotationError::MissingAssignmentRhs { node }),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "../tests/sam_annotator_tests.rs"]
mod tests;
