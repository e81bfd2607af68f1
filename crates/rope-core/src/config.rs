use crate::error::{ConfigError, Result};

/// Static per-rope configuration, fixed for the rope's lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RopeConfig {
    /// Node capacity allocated up front.
    pub max_size: usize,
    /// Rest length between adjacent nodes.
    pub segment_length: f32,
    /// Magnitude of the downward acceleration.
    pub gravity_scale: f32,
    /// Cosmetic width handed to the renderer.
    pub line_width: f32,
    /// Relaxation sweeps per tick. One sweep gives a visibly springy rope.
    pub iterations: u32,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            max_size: 35,
            segment_length: 0.25,
            gravity_scale: 1.5,
            line_width: 0.1,
            iterations: 1,
        }
    }
}

impl RopeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_size < 2 {
            return Err(ConfigError::InvalidMaxSize(self.max_size));
        }
        if !self.segment_length.is_finite() || self.segment_length <= 0.0 {
            return Err(ConfigError::InvalidSegmentLength(self.segment_length));
        }
        if !self.gravity_scale.is_finite() || self.gravity_scale < 0.0 {
            return Err(ConfigError::InvalidGravityScale(self.gravity_scale));
        }
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations(self.iterations));
        }
        Ok(())
    }
}
