//! Gamma-encoded sRGB
//!
//! sRGB is the gamma-encoded space displays consume. Channels here are
//! normalized to `0.0..=1.0`; [`DeviceColor`](super::DeviceColor) is the
//! `0..=255` form handed to callers.

use super::linear_rgb::LinearRgb;

/// IEC 61966-2-1 decode: sRGB to linear.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encode: linear to sRGB.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in sRGB color space, channels normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Encoded red
    pub r: f64,
    /// Encoded green
    pub g: f64,
    /// Encoded blue
    pub b: f64,
}

impl Srgb {
    /// Create from encoded channels.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Normalize 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use okscale_core::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }
}

impl From<LinearRgb> for Srgb {
    /// Encode linear RGB with the sRGB transfer function.
    ///
    /// The input is clamped to the unit cube first, so small overshoots from
    /// the Oklab inverse never produce channels outside `0.0..=1.0`.
    fn from(linear: LinearRgb) -> Self {
        let linear = linear.clamped();
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}
