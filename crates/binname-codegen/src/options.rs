//! Naming conventions the pass can be configured with.

use binname_common::limits::MAX_ANNOTATE_DEPTH;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANION_SUFFIX: &str = "$ClassObject$";
pub const DEFAULT_FACADE_SUFFIX: &str = "Package";
pub const DEFAULT_PACKAGE_FACADE_NAME: &str = "_DefaultPackage";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotateOptions {
    /// Appended to the enclosing class name for a companion object.
    pub companion_suffix: String,
    /// Appended to the capitalized last package segment for facade classes.
    pub facade_suffix: String,
    /// Facade class name for the root package.
    pub default_facade_name: String,
    /// Abort the unit when two class-like symbols get the same binary name.
    pub check_unique_names: bool,
    pub max_depth: u32,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptions {
            companion_suffix: DEFAULT_COMPANION_SUFFIX.to_string(),
            facade_suffix: DEFAULT_FACADE_SUFFIX.to_string(),
            default_facade_name: DEFAULT_PACKAGE_FACADE_NAME.to_string(),
            check_unique_names: true,
            max_depth: MAX_ANNOTATE_DEPTH,
        }
    }
}

impl AnnotateOptions {
    pub fn with_companion_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.companion_suffix = suffix.into();
        self
    }

    pub fn with_facade_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.facade_suffix = suffix.into();
        self
    }

    pub fn with_default_facade_name(mut self, name: impl Into<String>) -> Self {
        self.default_facade_name = name.into();
        self
    }

    pub fn with_unique_name_check(mut self, enabled: bool) -> Self {
        self.check_unique_names = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
