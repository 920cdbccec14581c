use serde::Deserialize;

/// Resolver configuration.
///
/// - `report_unresolved` keeps defaults that could not be evaluated as
///   `DefaultValue::Unresolved` instead of reporting them as `Null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Distinguish "not a literal" from an explicit `NULL` default
    pub report_unresolved: bool,
}

impl ResolverConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unevaluable defaults are reported as `Null`.
    pub fn conflated() -> Self {
        Self { report_unresolved: false }
    }

    /// Unevaluable defaults are reported as `Unresolved`.
    pub fn report_unresolved() -> Self {
        Self { report_unresolved: true }
    }
}
