use thiserror::Error;

/// Rejection of a malformed parameter set, raised before a run starts.
///
/// These are the only caller-visible failures in the crate. Numeric edge
/// conditions inside the engine (near-zero speed, near-flat crossings) are
/// handled with explicit thresholds and never surface as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
