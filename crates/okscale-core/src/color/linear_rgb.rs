//! Linear RGB color type
//!
//! Linear RGB is the space where channel values are proportional to emitted
//! light. WCAG relative luminance and the Oklab matrices are both defined on
//! linear values, so every conversion passes through here.

use super::srgb::{srgb_to_linear, Srgb};

/// A color in linear sRGB space.
///
/// In-gamut colors have channels in `0.0..=1.0`. Intermediate results of the
/// Oklab inverse may fall slightly outside that range; nothing is clamped
/// until [`LinearRgb::clamped`] is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray with the given linear intensity on every channel.
    #[inline]
    pub fn gray(y: f64) -> Self {
        Self::new(y, y, y)
    }

    /// Clamp every channel into `0.0..=1.0`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// WCAG relative luminance of this color.
    ///
    /// `Y = 0.2126 R + 0.7152 G + 0.0722 B` on linear channels.
    #[inline]
    pub fn luminance(self) -> f64 {
        0.2126f64.mul_add(self.r, 0.7152f64.mul_add(self.g, 0.0722 * self.b))
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode gamma-encoded sRGB with the IEC 61966-2-1 transfer function.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
