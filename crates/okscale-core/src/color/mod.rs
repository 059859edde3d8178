//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - [`Okhsl`]: perceptual hue/saturation/lightness, where scales are designed
//! - [`Oklab`] / [`Xyz`]: the Cartesian spaces Okhsl and the lightness mapping sit on
//! - [`LinearRgb`]: linear light, where WCAG luminance is defined
//! - [`Srgb`]: gamma-encoded, normalized to `0.0..=1.0`
//! - [`DeviceColor`]: sRGB in `0.0..=255.0`, the unit scales are returned in
//!
//! # Example
//!
//! ```
//! use okscale_core::{ColorConverter, Okhsl, OkhslConverter};
//!
//! let converter = OkhslConverter;
//! let color = converter.hsl_to_device(Okhsl::new(250.0, 0.6, 0.5));
//! let hex = converter.device_to_hex(color);
//! assert_eq!(hex.len(), 7);
//! ```

mod device;
mod error;
mod linear_rgb;
mod okhsl;
mod oklab;
mod srgb;

pub use device::DeviceColor;
pub use error::ParseColorError;
pub use linear_rgb::LinearRgb;
pub use okhsl::{toe, toe_inv, Okhsl};
pub use oklab::{Oklab, Xyz, D65_X, D65_Y};
pub use srgb::{linear_to_srgb, srgb_to_linear, Srgb};

/// Conversion from the perceptual model into device colors and hex strings.
///
/// The scale generator only relies on this contract. Any implementation must
/// realize the Okhsl model exactly (toe-corrected Oklab lightness); a
/// different HSL model breaks the contrast guarantees.
pub trait ColorConverter {
    /// Convert an Okhsl color to a fractional `0..=255` sRGB triple.
    fn hsl_to_device(&self, hsl: Okhsl) -> DeviceColor;

    /// Format a device color as lowercase `#rrggbb` (rounded).
    fn device_to_hex(&self, color: DeviceColor) -> String {
        color.to_hex()
    }
}

/// Closed-form Okhsl → sRGB converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OkhslConverter;

impl ColorConverter for OkhslConverter {
    #[inline]
    fn hsl_to_device(&self, hsl: Okhsl) -> DeviceColor {
        DeviceColor::from(Srgb::from(hsl))
    }
}
