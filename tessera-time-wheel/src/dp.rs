//! # Density-Independent Pixels (Dp)
//!
//! Wheel sizing is configured in [`Dp`] so the same configuration looks the
//! same on screens of different density. Scroll offsets, on the other hand,
//! are reported by the host surface in physical pixels; the conversion between
//! the two goes through an explicit scale factor owned by the host.
//!
//! ## Usage
//!
//! ```
//! use tessera_time_wheel::Dp;
//!
//! let item = Dp(50.0);
//! assert_eq!(item.to_pixels_f32(2.0), 100.0);
//! assert_eq!(Dp::from_pixels_f32(100.0, 2.0), item);
//! ```

use std::fmt;

/// Density-independent pixels (dp) for wheel sizing.
///
/// One dp equals one physical pixel at a scale factor of `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f64);

impl Dp {
    /// A zero length.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Converts to physical pixels using the given scale factor.
    pub fn to_pixels_f32(self, scale_factor: f64) -> f32 {
        (self.0 * scale_factor) as f32
    }

    /// Converts from physical pixels using the given scale factor.
    pub fn from_pixels_f32(value: f32, scale_factor: f64) -> Self {
        Self(value as f64 / scale_factor)
    }

    /// Returns `true` if the length is finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}
