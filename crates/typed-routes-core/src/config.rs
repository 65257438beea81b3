//! Configuration for filling routes from a parameters bag.

use serde::{Deserialize, Serialize};

/// Options for [`Route::fill_with_config`](crate::Route::fill_with_config)
/// and [`DynamicRoute::fill_with_config`](crate::DynamicRoute::fill_with_config).
///
/// # Example
///
/// ```
/// use typed_routes_core::FillConfig;
///
/// let config = FillConfig::new().deny_unknown(true).empty_as_absent(true);
/// assert!(config.get_deny_unknown());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    deny_unknown: bool,
    empty_as_absent: bool,
}

impl FillConfig {
    /// Create the default configuration: unknown keys are ignored and empty
    /// strings are substituted verbatim.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject bag keys that do not name a route parameter.
    #[must_use]
    pub fn deny_unknown(mut self, deny: bool) -> Self {
        self.deny_unknown = deny;
        self
    }

    /// Treat an empty string value as if the key were missing.
    #[must_use]
    pub fn empty_as_absent(mut self, enabled: bool) -> Self {
        self.empty_as_absent = enabled;
        self
    }

    /// Whether unknown keys are rejected.
    #[must_use]
    pub fn get_deny_unknown(&self) -> bool {
        self.deny_unknown
    }

    /// Whether empty strings count as absent.
    #[must_use]
    pub fn get_empty_as_absent(&self) -> bool {
        self.empty_as_absent
    }
}
