use crate::math::Real;

/// Error returned when the overlap removal is configured with invalid options.
///
/// It is always reported before any pass runs and before subscribing to the layout.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A dimension of the default size is negative or not finite.
    #[error("the default {dimension} must be finite and non-negative, got {value}")]
    InvalidDefaultSize {
        /// The name of the offending dimension.
        dimension: &'static str,
        /// Its value.
        value: Real,
    },
    /// The maximum number of passes is zero.
    #[error("the maximum number of passes must be at least one")]
    ZeroPassLimit,
}
