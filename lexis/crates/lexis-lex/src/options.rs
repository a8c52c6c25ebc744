//! Scanner options.
//!
//! Both options are off by default. With defaults the scanner treats `&&`
//! as two `&` operators and accepts unterminated strings and block comments.

use serde::{Deserialize, Serialize};

/// Opt-in behavior changes for a [`Scanner`](crate::Scanner).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Emit `&&` and `||` as single two-character operators.
    pub compound_logical_operators: bool,
    /// Fail on string literals and block comments missing their terminator.
    pub strict_literals: bool,
}

impl ScanOptions {
    /// Options with `compound_logical_operators` set.
    pub fn with_compound_logical_operators(mut self, enabled: bool) -> Self {
        self.compound_logical_operators = enabled;
        self
    }

    /// Options with `strict_literals` set.
    pub fn with_strict_literals(mut self, enabled: bool) -> Self {
        self.strict_literals = enabled;
        self
    }
}
