//! Common types and utilities for the binname annotating pass.
//!
//! This crate provides foundational types used across all binname crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`) and stable diagnostic codes
//! - Traversal limits shared by the walker and the driver

// Diagnostics reported when a compilation unit is aborted
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes};

// Centralized limits and thresholds
pub mod limits;
