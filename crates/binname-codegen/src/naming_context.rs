//! Naming context: the enclosing-class stack and the binary-name stack.
//!
//! The two stacks are pushed and popped together, so they always have the
//! same depth. Name-only frames (member functions, properties) repeat the
//! enclosing symbol of the frame below them.

use crate::error::{AnnotateResult, AnnotationError};
use binname_resolve::SymbolId;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub entered: u32,
    pub left: u32,
}

#[derive(Debug, Default)]
pub struct NamingContext {
    /// `SymbolId::NONE` marks a frame with no enclosing class (package unit).
    symbols: Vec<SymbolId>,
    names: Vec<Arc<str>>,
    stats: FrameStats,
}

impl NamingContext {
    pub fn new() -> Self {
        NamingContext::default()
    }

    pub fn enter(&mut self, symbol: Option<SymbolId>, name: Arc<str>) {
        self.symbols.push(symbol.unwrap_or(SymbolId::NONE));
        self.names.push(name);
        self.stats.entered += 1;
    }

    /// Push a name while keeping the current enclosing class.
    pub fn enter_member(&mut self, name: Arc<str>) {
        let symbol = self.symbols.last().copied().unwrap_or(SymbolId::NONE);
        self.symbols.push(symbol);
        self.names.push(name);
        self.stats.entered += 1;
    }

    pub fn leave(&mut self) -> AnnotateResult<()> {
        match (self.symbols.pop(), self.names.pop()) {
            (Some(_), Some(_)) => {
                self.stats.left += 1;
                Ok(())
            }
            _ => Err(AnnotationError::EmptyContext),
        }
    }

    pub fn current_name(&self) -> AnnotateResult<&Arc<str>> {
        self.names.last().ok_or(AnnotationError::EmptyContext)
    }

    /// Innermost enclosing class, if any frame carries one.
    pub fn current_symbol(&self) -> Option<SymbolId> {
        self.symbols.last().copied().filter(|symbol| symbol.is_some())
    }

    #[inline]
    pub fn depth(&self) -> usize {
        debug_assert_eq!(self.symbols.len(), self.names.len());
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../tests/naming_context_tests.rs"]
mod tests;
