//! Device color: the `0..=255` sRGB triple a scale step resolves to.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// An sRGB color with channels scaled to `0.0..=255.0`.
///
/// Channels stay fractional so contrast checks can run on the exact value;
/// [`DeviceColor::to_bytes`] and [`DeviceColor::to_hex`] round for output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceColor {
    /// Red channel, `0.0..=255.0`
    pub r: f64,
    /// Green channel, `0.0..=255.0`
    pub g: f64,
    /// Blue channel, `0.0..=255.0`
    pub b: f64,
}

impl DeviceColor {
    /// Create a device color from fractional channels.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a device color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(f64::from(bytes[0]), f64::from(bytes[1]), f64::from(bytes[2]))
    }

    /// Round and clamp to a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use okscale_core::DeviceColor;
    /// let c = DeviceColor::new(254.6, 127.5, -0.2);
    /// assert_eq!(c.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [round_channel(self.r), round_channel(self.g), round_channel(self.b)]
    }

    /// Lowercase `#rrggbb` of the rounded channels.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether all three rounded channels are equal.
    pub fn is_gray(self) -> bool {
        let [r, g, b] = self.to_bytes();
        r == g && g == b
    }

    /// Normalized sRGB view of this color.
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::new(self.r / 255.0, self.g / 255.0, self.b / 255.0)
    }

    /// WCAG relative luminance of the fractional channels.
    #[inline]
    pub fn luminance(self) -> f64 {
        LinearRgb::from(self.to_srgb()).luminance()
    }

    /// Parse a hex string. Same as [`str::parse`].
    #[inline]
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        s.parse()
    }
}

#[inline]
fn round_channel(v: f64) -> u8 {
    // Clamped into 0..=255 first, so the cast cannot truncate.
    v.round().clamp(0.0, 255.0) as u8
}

impl From<Srgb> for DeviceColor {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: (srgb.r * 255.0).clamp(0.0, 255.0),
            g: (srgb.g * 255.0).clamp(0.0, 255.0),
            b: (srgb.b * 255.0).clamp(0.0, 255.0),
        }
    }
}

impl fmt::Display for DeviceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DeviceColor {
    type Err = ParseColorError;

    /// Parse a device color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use okscale_core::DeviceColor;
    ///
    /// let white: DeviceColor = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.to_bytes(), [255, 255, 255]);
    ///
    /// let red: DeviceColor = "#f00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_bytes([r, g, b]))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_bytes([r, g, b]))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
