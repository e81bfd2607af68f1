use thiserror::Error;

/// Rejected rope configuration.
///
/// The solver itself is total and never fails; errors only exist at the
/// boundary where a host hands in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid max_size: {0} (must be >= 2)")]
    InvalidMaxSize(usize),

    #[error("Invalid segment_length: {0} (must be finite and > 0)")]
    InvalidSegmentLength(f32),

    #[error("Invalid gravity_scale: {0} (must be finite and >= 0)")]
    InvalidGravityScale(f32),

    #[error("Invalid line_width: {0} (must be finite and >= 0)")]
    InvalidLineWidth(f32),

    #[error("Invalid iterations: {0} (must be >= 1)")]
    InvalidIterations(u32),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
