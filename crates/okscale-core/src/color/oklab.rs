//! Oklab and the XYZ entry point into it
//!
//! Oklab is the Cartesian space underneath Okhsl. Two entry points lead into
//! it: linear sRGB (for checking and reporting colors) and CIE XYZ (for the
//! luminance-driven lightness mapping, where only a D65 gray luminance is
//! known).
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// D65 white point chromaticity, x.
pub const D65_X: f64 = 0.3127;
/// D65 white point chromaticity, y.
pub const D65_Y: f64 = 0.3290;

/// A CIE XYZ tristimulus value (D65, Y normalized so white is 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus
    pub x: f64,
    /// Y tristimulus (relative luminance)
    pub y: f64,
    /// Z tristimulus
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ value.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Expand a relative luminance into the XYZ of a D65 gray.
    ///
    /// `X = Y·x/y`, `Z = Y·(1 − x − y)/y` with the D65 chromaticity.
    ///
    /// # Example
    /// ```
    /// use okscale_core::Xyz;
    /// let white = Xyz::from_luminance(1.0);
    /// assert!((white.x - 0.95046).abs() < 1e-4);
    /// assert!((white.z - 1.08906).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn from_luminance(y: f64) -> Self {
        Self {
            x: y * D65_X / D65_Y,
            y,
            z: y * (1.0 - D65_X - D65_Y) / D65_Y,
        }
    }
}

/// Oklab coordinates. `l` runs from black (0) to white (1) for colors
/// inside sRGB; `a` and `b` are the opponent axes, zero for grays.
///
/// Nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
}

impl Oklab {
    /// Build from raw coordinates.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Apply the shared LMS′ → Lab matrix (M2) to cube-rooted cone responses.
    #[inline]
    fn from_lms(l: f64, m: f64, s: f64) -> Self {
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear sRGB (2021-01-25 matrices).
    fn from(rgb: LinearRgb) -> Self {
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;
        Oklab::from_lms(l, m, s)
    }
}

impl From<Xyz> for Oklab {
    /// Convert from D65 XYZ through the cone-response matrix M1.
    fn from(xyz: Xyz) -> Self {
        let l = 0.8189330101 * xyz.x + 0.3618667424 * xyz.y - 0.1288597137 * xyz.z;
        let m = 0.0329845436 * xyz.x + 0.9293118715 * xyz.y + 0.0361456387 * xyz.z;
        let s = 0.0482003018 * xyz.x + 0.2643662691 * xyz.y + 0.6338517070 * xyz.z;
        Oklab::from_lms(l, m, s)
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear sRGB. The result is not clamped.
    fn from(lab: Oklab) -> Self {
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}
