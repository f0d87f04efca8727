//! Terrain construction errors.

/// Errors raised when terrain parameters cannot produce a valid mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// A construction parameter is outside its valid domain.
    #[error("invalid terrain configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value, formatted for display.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl TerrainError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
