//! Driver for the binname pass.
//!
//! Reads programs (shared symbols plus per-unit trees and resolutions) from
//! JSON, annotates every unit in parallel and reports the bindings as JSON.

pub mod args;
pub mod driver;
pub mod input;
pub mod report;
