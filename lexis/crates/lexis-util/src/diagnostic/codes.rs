//! Diagnostic codes for categorizing errors.
//!
//! Codes follow the format `{prefix}{number}` with a 4-digit zero-padded
//! number. Scanner errors live in the `E1xxx` range.
//!
//! ```
//! use lexis_util::diagnostic::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::E_UNEXPECTED_CHAR.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g. "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: character outside every recognized class
    pub const E_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: string literal without a closing quote
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: block comment without a closing `*/`
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
