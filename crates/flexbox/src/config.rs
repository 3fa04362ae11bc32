//! Runtime configuration for the layout engine.
//!
//! Layout inputs themselves (`FlexContainer`, `FlexItem`) are plain data; this module only
//! holds switches that change how a pass is checked, not what it computes.

use std::env;

/// Environment variable that enables post-pass invariant checks when set to `"1"`.
pub const CHECK_INVARIANTS_ENV: &str = "FLEXBOX_CHECK_INVARIANTS";

/// Engine-wide switches.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EngineConfig {
    /// Verify line coverage and main-size clamping after every pass and log violations.
    pub check_invariants: bool,
}

impl EngineConfig {
    /// Construct a configuration with explicit values.
    #[inline]
    #[must_use]
    pub const fn new(check_invariants: bool) -> Self {
        Self { check_invariants }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `FLEXBOX_CHECK_INVARIANTS`: set to "1" to enable invariant checks (default: disabled).
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let check_invariants = env::var(CHECK_INVARIANTS_ENV).ok().as_deref() == Some("1");
        Self { check_invariants }
    }
}
