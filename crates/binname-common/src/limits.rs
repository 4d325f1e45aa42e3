//! Centralized limits for the annotating pass.
//!
//! The walker recurses once per nested declaration or expression, so the
//! depth of the input tree bounds the depth of the Rust call stack. These
//! constants keep that bounded on every platform the driver runs on.

/// Maximum nesting depth the tree walker accepts before aborting the unit.
///
/// Real sources rarely nest more than a few dozen levels; deeply chained
/// expressions (`a + (b + (c + ...)))`) are the usual way to get close.
pub const MAX_ANNOTATE_DEPTH: u32 = 500;

/// Maximum number of nodes the arena pre-allocates for, regardless of the
/// capacity hint passed by the caller.
pub const MAX_NODE_PREALLOC: usize = 5_000_000;
