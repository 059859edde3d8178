//! Okhsl: a perceptual hue/saturation/lightness model over Oklab
//!
//! Okhsl reshapes Oklab into a cylinder aligned with the sRGB gamut:
//!
//! - **h**: Oklab hue angle, here in degrees `0.0..360.0`
//! - **s**: saturation relative to the gamut boundary at that hue and
//!   lightness (`0.0` = gray, `1.0` = on the boundary)
//! - **l**: toe-corrected Oklab lightness
//!
//! Lightness is what the scale generator drives from WCAG contrast, so the
//! toe curve below is shared with [`crate::lightness`].
//!
//! # References
//!
//! Björn Ottosson, "Okhsv and Okhsl: two new color spaces for color picking"
//! <https://bottosson.github.io/posts/colorpicker/>

use std::f64::consts::TAU;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::srgb::Srgb;

const K1: f64 = 0.206;
const K2: f64 = 0.03;
const K3: f64 = (1.0 + K1) / (1.0 + K2);

/// Saturation at which the interpolation switches from `C_0..C_mid` to
/// `C_mid..C_max`.
const MID: f64 = 0.8;
const MID_INV: f64 = 1.25;

/// Toe curve: Oklab lightness to Okhsl lightness.
///
/// `toe(L) = 0.5·(k3·L − k1 + sqrt((k3·L − k1)² + 4·k2·k3·L))`
#[inline]
pub fn toe(x: f64) -> f64 {
    let k = K3 * x - K1;
    0.5 * (k + (k * k + 4.0 * K2 * K3 * x).sqrt())
}

/// Inverse of [`toe`]: Okhsl lightness back to Oklab lightness.
#[inline]
pub fn toe_inv(x: f64) -> f64 {
    (x * x + K1 * x) / (K3 * (x + K2))
}

/// A color in Okhsl. Hue is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Okhsl {
    /// Hue in degrees, `0.0..=360.0`
    pub h: f64,
    /// Saturation, `0.0..=1.0`
    pub s: f64,
    /// Lightness, `0.0..=1.0`
    pub l: f64,
}

impl Okhsl {
    /// Create a new Okhsl color.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Lightness/chroma pair at the gamut cusp for one hue.
#[derive(Debug, Clone, Copy)]
struct Cusp {
    l: f64,
    c: f64,
}

/// `S = C/L`, `T = C/(1 − L)` encoding of a cusp.
#[derive(Debug, Clone, Copy)]
struct St {
    s: f64,
    t: f64,
}

impl From<Cusp> for St {
    fn from(cusp: Cusp) -> Self {
        St {
            s: cusp.c / cusp.l,
            t: cusp.c / (1.0 - cusp.l),
        }
    }
}

/// Chroma stops used by the saturation interpolation.
#[derive(Debug, Clone, Copy)]
struct ChromaStops {
    c_0: f64,
    c_mid: f64,
    c_max: f64,
}

/// Maximum saturation `S = C/L` that stays inside sRGB for the unit hue
/// vector `(a, b)`.
fn compute_max_saturation(a: f64, b: f64) -> f64 {
    // Pick the channel that clips first and its polynomial fit.
    let (k0, k1, k2, k3, k4, wl, wm, ws) = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        (
            1.19086277,
            1.76576728,
            0.59662641,
            0.75515197,
            0.56771245,
            4.0767416621,
            -3.3077115913,
            0.2309699292,
        )
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        (
            0.73956515,
            -0.45954404,
            0.08285427,
            0.12541070,
            0.14503204,
            -1.2684380046,
            2.6097574011,
            -0.3413193965,
        )
    } else {
        (
            1.35733652,
            -0.00915799,
            -1.15130210,
            -0.50559606,
            0.00692167,
            -0.0041960863,
            -0.7034186147,
            1.7076147010,
        )
    };

    let mut s = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    // One Halley step.
    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;

    let l_ = 1.0 + s * k_l;
    let m_ = 1.0 + s * k_m;
    let s_ = 1.0 + s * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let l_ds = 3.0 * k_l * l_ * l_;
    let m_ds = 3.0 * k_m * m_ * m_;
    let s_ds = 3.0 * k_s * s_ * s_;

    let l_ds2 = 6.0 * k_l * k_l * l_;
    let m_ds2 = 6.0 * k_m * k_m * m_;
    let s_ds2 = 6.0 * k_s * k_s * s_;

    let f = wl * l + wm * m + ws * s3;
    let f1 = wl * l_ds + wm * m_ds + ws * s_ds;
    let f2 = wl * l_ds2 + wm * m_ds2 + ws * s_ds2;

    s -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    s
}

fn find_cusp(a: f64, b: f64) -> Cusp {
    let s_cusp = compute_max_saturation(a, b);

    let rgb = LinearRgb::from(Oklab::new(1.0, s_cusp * a, s_cusp * b));
    let l_cusp = (1.0 / rgb.r.max(rgb.g).max(rgb.b)).cbrt();
    Cusp {
        l: l_cusp,
        c: l_cusp * s_cusp,
    }
}

/// Parameter `t` where the line `L = l0·(1 − t) + t·l1`, `C = t·c1` leaves
/// the sRGB gamut.
fn find_gamut_intersection(a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Cusp) -> f64 {
    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // Lower half: the triangle is exact.
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // Upper half: intersect the triangle, then refine with one Halley step.
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let dl = l1 - l0;
    let dc = c1;

    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;

    let l_dt = dl + dc * k_l;
    let m_dt = dl + dc * k_m;
    let s_dt = dl + dc * k_s;

    let l = l0 * (1.0 - t) + t * l1;
    let c = t * c1;

    let l_ = l + c * k_l;
    let m_ = l + c * k_m;
    let s_ = l + c * k_s;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let ldt = 3.0 * l_dt * l_ * l_;
    let mdt = 3.0 * m_dt * m_ * m_;
    let sdt = 3.0 * s_dt * s_ * s_;

    let ldt2 = 6.0 * l_dt * l_dt * l_;
    let mdt2 = 6.0 * m_dt * m_dt * m_;
    let sdt2 = 6.0 * s_dt * s_dt * s_;

    let halley = |w: [f64; 3]| {
        let f = w[0] * l3 + w[1] * m3 + w[2] * s3 - 1.0;
        let f1 = w[0] * ldt + w[1] * mdt + w[2] * sdt;
        let f2 = w[0] * ldt2 + w[1] * mdt2 + w[2] * sdt2;
        let u = f1 / (f1 * f1 - 0.5 * f * f2);
        if u >= 0.0 {
            -f * u
        } else {
            f64::MAX
        }
    };

    let t_r = halley([4.0767416621, -3.3077115913, 0.2309699292]);
    let t_g = halley([-1.2684380046, 2.6097574011, -0.3413193965]);
    let t_b = halley([-0.0041960863, -0.7034186147, 1.7076147010]);

    t += t_r.min(t_g).min(t_b);
    t
}

/// Smooth approximation of the cusp, tuned so `S_mid < S_max`, `T_mid < T_max`.
fn st_mid(a_: f64, b_: f64) -> St {
    let s = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b_
                + a_ * (-2.19557347
                    + 1.75198401 * b_
                    + a_ * (-2.13704948 - 10.02301043 * b_
                        + a_ * (-4.24894561 + 5.38770819 * b_ + 4.69891013 * a_))));

    let t = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b_
                + a_ * (0.40370612
                    + 0.90148123 * b_
                    + a_ * (-0.27087943
                        + 0.61223990 * b_
                        + a_ * (0.00299215 - 0.45399568 * b_ - 0.14661872 * a_))));

    St { s, t }
}

fn chroma_stops(l: f64, a_: f64, b_: f64) -> ChromaStops {
    let cusp = find_cusp(a_, b_);

    let c_max = find_gamut_intersection(a_, b_, l, 1.0, l, cusp);
    let st_max = St::from(cusp);

    // Compensates for the curved upper part of the gamut.
    let k = c_max / (l * st_max.s).min((1.0 - l) * st_max.t);

    let c_mid = {
        let st = st_mid(a_, b_);
        let c_a = l * st.s;
        let c_b = (1.0 - l) * st.t;
        0.9 * k * (1.0 / (1.0 / c_a.powi(4) + 1.0 / c_b.powi(4))).sqrt().sqrt()
    };

    // Hue-independent shape for C_0.
    let c_0 = {
        let c_a = l * 0.4;
        let c_b = (1.0 - l) * 0.8;
        (1.0 / (1.0 / (c_a * c_a) + 1.0 / (c_b * c_b))).sqrt()
    };

    ChromaStops { c_0, c_mid, c_max }
}

impl From<Okhsl> for Srgb {
    /// Convert Okhsl to gamma-encoded sRGB.
    ///
    /// Lightness at or beyond the ends of `0.0..=1.0` maps to pure black or
    /// white, and zero saturation skips the gamut search entirely so grays
    /// stay exactly neutral.
    fn from(hsl: Okhsl) -> Self {
        if hsl.l >= 1.0 {
            return Srgb::new(1.0, 1.0, 1.0);
        }
        if hsl.l <= 0.0 {
            return Srgb::new(0.0, 0.0, 0.0);
        }

        let l = toe_inv(hsl.l);
        if hsl.s <= 0.0 {
            return Srgb::from(LinearRgb::from(Oklab::new(l, 0.0, 0.0)));
        }

        let h = hsl.h.rem_euclid(360.0) / 360.0;
        let a_ = (TAU * h).cos();
        let b_ = (TAU * h).sin();

        let ChromaStops { c_0, c_mid, c_max } = chroma_stops(l, a_, b_);
        let s = hsl.s.min(1.0);

        let c = if s < MID {
            let t = MID_INV * s;
            let k_1 = MID * c_0;
            let k_2 = 1.0 - k_1 / c_mid;
            t * k_1 / (1.0 - k_2 * t)
        } else {
            let t = (s - MID) / (1.0 - MID);
            let k_0 = c_mid;
            let k_1 = (1.0 - MID) * c_mid * c_mid * MID_INV * MID_INV / c_0;
            let k_2 = 1.0 - k_1 / (c_max - c_mid);
            k_0 + t * k_1 / (1.0 - k_2 * t)
        };

        Srgb::from(LinearRgb::from(Oklab::new(l, c * a_, c * b_)))
    }
}

impl From<Srgb> for Okhsl {
    /// Convert gamma-encoded sRGB to Okhsl.
    ///
    /// Achromatic inputs get hue 0 and saturation 0.
    fn from(srgb: Srgb) -> Self {
        let lab = Oklab::from(LinearRgb::from(srgb));
        let l = toe(lab.l);
        let c = lab.chroma();

        if c < 1e-9 || lab.l <= 0.0 || lab.l >= 1.0 {
            return Okhsl::new(0.0, 0.0, l.clamp(0.0, 1.0));
        }

        let a_ = lab.a / c;
        let b_ = lab.b / c;
        let h = (lab.b.atan2(lab.a).to_degrees()).rem_euclid(360.0);

        let ChromaStops { c_0, c_mid, c_max } = chroma_stops(lab.l, a_, b_);

        let s = if c < c_mid {
            let k_1 = MID * c_0;
            let k_2 = 1.0 - k_1 / c_mid;
            let t = c / (k_1 + k_2 * c);
            t * MID
        } else {
            let k_0 = c_mid;
            let k_1 = (1.0 - MID) * c_mid * c_mid * MID_INV * MID_INV / c_0;
            let k_2 = 1.0 - k_1 / (c_max - c_mid);
            let t = (c - k_0) / (k_1 + k_2 * (c - k_0));
            MID + (1.0 - MID) * t
        };

        Okhsl::new(h, s, l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_toe_endpoints() {
        assert!(approx_eq(toe(0.0), 0.0, 1e-12));
        assert!(approx_eq(toe(1.0), 1.0, 1e-4), "toe(1) = {}", toe(1.0));
    }

    #[test]
    fn test_toe_inverse() {
        for i in 0..=100 {
            let x = f64::from(i) / 100.0;
            assert!(
                approx_eq(toe_inv(toe(x)), x, 1e-9),
                "toe_inv(toe({x})) = {}",
                toe_inv(toe(x))
            );
        }
    }

    /// The toe flattens the low end: toe(L) < L for dark values.
    #[test]
    fn test_toe_darkens_low_end() {
        for x in [0.05, 0.1, 0.2, 0.3] {
            assert!(toe(x) < x, "toe({x}) = {} should be below {x}", toe(x));
        }
    }

    #[test]
    fn test_gray_is_neutral() {
        for l in [0.1, 0.35, 0.5, 0.8, 0.99] {
            let srgb = Srgb::from(Okhsl::new(0.0, 0.0, l));
            assert!(approx_eq(srgb.r, srgb.g, 1e-9), "gray drift at l={l}: {srgb:?}");
            assert!(approx_eq(srgb.g, srgb.b, 1e-9), "gray drift at l={l}: {srgb:?}");
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(Srgb::from(Okhsl::new(120.0, 1.0, 1.0)), Srgb::new(1.0, 1.0, 1.0));
        assert_eq!(Srgb::from(Okhsl::new(120.0, 1.0, 0.0)), Srgb::new(0.0, 0.0, 0.0));
    }

    /// Fully saturated colors sit on the gamut boundary: one channel clips.
    #[test]
    fn test_full_saturation_touches_gamut() {
        for h in [0.0, 60.0, 140.0, 200.0, 265.0, 320.0] {
            let srgb = Srgb::from(Okhsl::new(h, 1.0, 0.5));
            let max = srgb.r.max(srgb.g).max(srgb.b);
            let min = srgb.r.min(srgb.g).min(srgb.b);
            assert!(
                max > 0.99 || min < 0.01,
                "hue {h} at s=1 should touch the gamut: {srgb:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_through_srgb() {
        for (h, s, l) in [
            (30.0, 0.5, 0.5),
            (140.0, 0.9, 0.7),
            (250.0, 0.3, 0.4),
            (320.0, 0.7, 0.6),
        ] {
            let back = Okhsl::from(Srgb::from(Okhsl::new(h, s, l)));
            assert!(approx_eq(back.h, h, 1e-3), "hue {h} -> {}", back.h);
            assert!(approx_eq(back.s, s, 1e-3), "sat {s} -> {}", back.s);
            assert!(approx_eq(back.l, l, 1e-6), "light {l} -> {}", back.l);
        }
    }

    #[test]
    fn test_okhsl_matches_palette_crate() {
        use palette::convert::FromColorUnclamped;
        use palette::{LinSrgb, Okhsl as PaletteOkhsl, Oklab as PaletteOklab};

        for (h, s, l) in [(30.0, 0.5, 0.5), (140.0, 0.9, 0.7), (250.0, 0.3, 0.4)] {
            let ours = LinearRgb::from(Srgb::from(Okhsl::new(h, s, l)));

            let lab = PaletteOklab::<f64>::from_color_unclamped(PaletteOkhsl::new(h, s, l));
            let theirs = LinSrgb::<f64>::from_color_unclamped(lab);

            assert!(approx_eq(ours.r, theirs.red, 1e-3), "R mismatch at ({h}, {s}, {l})");
            assert!(approx_eq(ours.g, theirs.green, 1e-3), "G mismatch at ({h}, {s}, {l})");
            assert!(approx_eq(ours.b, theirs.blue, 1e-3), "B mismatch at ({h}, {s}, {l})");
        }
    }
}
