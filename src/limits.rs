//! Resource limits applied while parsing.
//!
//! Objects and arrays are parsed by recursive descent, so a deeply nested
//! input would otherwise exhaust the call stack before any grammar error is
//! found.

/// Default maximum nesting depth for arrays and objects.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of containers open at the same time.
    pub max_nesting_depth: usize,
}

impl Limits {
    pub const fn new(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }

    /// No depth guard at all. Only use this on trusted input.
    pub const fn unlimited() -> Self {
        Self {
            max_nesting_depth: usize::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NESTING_DEPTH)
    }
}
