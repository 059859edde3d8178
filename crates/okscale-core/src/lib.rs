#![allow(clippy::excessive_precision)]

//! okscale-core: color scales with predictable WCAG contrast
//!
//! A scale is a set of steps on a 0–1000 axis. Step `n` is placed so that its
//! WCAG contrast against white is `exp(3.04 · n / 1000)`, which makes the
//! contrast between any two steps depend only on their distance: for grays,
//! 500 steps apart is always at least 4.5:1 (AA for normal text).
//!
//! # Quick Start
//!
//! ```
//! use okscale_core::{generate, ScaleOptions};
//!
//! let options = ScaleOptions::new(250.0).chroma(0.1, 0.8);
//! let scale = generate(&options).unwrap();
//!
//! for (step, color) in scale.iter() {
//!     println!("{step}: {}", color.to_hex());
//! }
//! ```
//!
//! # Pipeline
//!
//! ```text
//! step ──> contrast model ──> luminance Y
//!                                  │
//!                                  v
//!                     Oklab L of D65 gray ──> toe ──> Okhsl l
//!
//! step ──> hue curve, chroma curve ──> Okhsl h, s
//!
//! Okhsl(h, s, l) ──> sRGB ──> DeviceColor (0..=255)
//! ```
//!
//! # Color Science
//!
//! ## Why lightness is driven from luminance
//!
//! WCAG contrast is defined on relative luminance, not on any perceptual
//! lightness. The generator therefore picks the luminance first, solving the
//! contrast equation against white (luminance 1):
//!
//! ```text
//! Y = (1 + 0.05) / contrast − 0.05
//! ```
//!
//! and only then converts that luminance into Okhsl lightness. For grays the
//! round trip is exact, so the contrast law holds to numerical precision.
//! Chromatic colors keep the Oklab lightness of the matching gray; their
//! luminance drifts a little with hue and saturation, which is what the 0.5
//! tolerance of [`ContrastReport`] covers. The AA margin at 500 steps is only
//! ~0.07, so saturated greens and cyans can fall under 4.5:1; audit any
//! chroma range above ~0.15 in that hue band.
//!
//! ## Why Okhsl
//!
//! Okhsl saturation is relative to the sRGB gamut boundary at the color's
//! hue and lightness, so any saturation in `0.0..=1.0` is displayable. A
//! chroma curve expressed as Okhsl saturation can never push a step out of
//! gamut, whatever the hue.
//!
//! ## The toe
//!
//! Raw Oklab L overstates lightness in the dark range. Okhsl applies a toe
//! curve (`k1 = 0.206`, `k2 = 0.03`) that brings it in line with CIE L*,
//! which is why [`lightness::luminance_to_perceptual_lightness`] ends with
//! [`toe`].

pub mod color;
pub mod contrast;
pub mod curves;
pub mod lightness;
pub mod report;
pub mod scale;


pub use color::{
    toe, toe_inv, ColorConverter, DeviceColor, LinearRgb, Okhsl, OkhslConverter, Oklab,
    ParseColorError, Srgb, Xyz,
};
pub use contrast::NotSolvable;
pub use curves::CurveError;
pub use report::ContrastReport;
pub use scale::{
    generate, generate_step, generate_with, ColorScale, ScaleError, ScaleOptions, ScaleStep,
    DEFAULT_STEPS,
};
