//! Color utilities: hex formatting, CIELAB conversion, and perceptual difference
//!
//! Colors are 8-bit-per-channel sRGB triples. Perceptual comparison goes through
//! the [`ColorDifference`] trait so callers depend only on the ordering it
//! produces, not on a particular formula.

use image::Rgb;
use serde::{Deserialize, Serialize};

/// An 8-bit sRGB color.
pub type Color = Rgb<u8>;

/// Format a color as an uppercase `#RRGGBB` string.
pub fn to_hex(color: &Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

/// LAB color representation for perceptual comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabColor {
    pub l: f64, // Lightness: 0-100
    pub a: f64, // Green-Red axis
    pub b: f64, // Blue-Yellow axis
}

impl LabColor {
    /// Convert an sRGB color to LAB using the D65 reference white.
    pub fn from_rgb(color: Color) -> Self {
        let r_lin = srgb_to_linear(color[0] as f64 / 255.0);
        let g_lin = srgb_to_linear(color[1] as f64 / 255.0);
        let b_lin = srgb_to_linear(color[2] as f64 / 255.0);

        let x = r_lin * 0.4124564 + g_lin * 0.3575761 + b_lin * 0.1804375;
        let y = r_lin * 0.2126729 + g_lin * 0.7151522 + b_lin * 0.0721750;
        let z = r_lin * 0.0193339 + g_lin * 0.1191920 + b_lin * 0.9503041;

        let fx = lab_f(x / 0.95047);
        let fy = lab_f(y / 1.00000);
        let fz = lab_f(z / 1.08883);

        Self { l: 116.0 * fy - 16.0, a: 500.0 * (fx - fy), b: 200.0 * (fy - fz) }
    }

    /// Euclidean distance in LAB (CIE76 Delta E).
    pub fn cie76(&self, other: &LabColor) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// CIEDE2000 Delta E with unit weighting factors (kL = kC = kH = 1).
    pub fn ciede2000(&self, other: &LabColor) -> f64 {
        const POW25_7: f64 = 6_103_515_625.0; // 25^7

        let (l1, a1, b1) = (self.l, self.a, self.b);
        let (l2, a2, b2) = (other.l, other.a, other.b);

        let c_bar = ((a1 * a1 + b1 * b1).sqrt() + (a2 * a2 + b2 * b2).sqrt()) / 2.0;
        let c_bar7 = c_bar.powi(7);
        let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

        let a1p = (1.0 + g) * a1;
        let a2p = (1.0 + g) * a2;
        let c1p = (a1p * a1p + b1 * b1).sqrt();
        let c2p = (a2p * a2p + b2 * b2).sqrt();
        let h1p = hue_degrees(b1, a1p);
        let h2p = hue_degrees(b2, a2p);

        let delta_lp = l2 - l1;
        let delta_cp = c2p - c1p;
        let chroma_zero = c1p * c2p == 0.0;

        let delta_hp = if chroma_zero {
            0.0
        } else {
            let d = h2p - h1p;
            if d > 180.0 {
                d - 360.0
            } else if d < -180.0 {
                d + 360.0
            } else {
                d
            }
        };
        let delta_big_hp = 2.0 * (c1p * c2p).sqrt() * (delta_hp.to_radians() / 2.0).sin();

        let l_bar_p = (l1 + l2) / 2.0;
        let c_bar_p = (c1p + c2p) / 2.0;
        let h_bar_p = if chroma_zero {
            h1p + h2p
        } else if (h1p - h2p).abs() <= 180.0 {
            (h1p + h2p) / 2.0
        } else if h1p + h2p < 360.0 {
            (h1p + h2p + 360.0) / 2.0
        } else {
            (h1p + h2p - 360.0) / 2.0
        };

        let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
            + 0.24 * (2.0 * h_bar_p).to_radians().cos()
            + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
            - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

        let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
        let c_bar_p7 = c_bar_p.powi(7);
        let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
        let l_dev = (l_bar_p - 50.0).powi(2);
        let s_l = 1.0 + 0.015 * l_dev / (20.0 + l_dev).sqrt();
        let s_c = 1.0 + 0.045 * c_bar_p;
        let s_h = 1.0 + 0.015 * c_bar_p * t;
        let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

        let dl = delta_lp / s_l;
        let dc = delta_cp / s_c;
        let dh = delta_big_hp / s_h;
        (dl * dl + dc * dc + dh * dh + r_t * dc * dh).sqrt()
    }
}

/// Hue angle in degrees, in `[0, 360)`; zero for achromatic input.
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// sRGB gamma expansion (inverse companding).
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// LAB f function for XYZ to LAB conversion.
fn lab_f(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta.powi(3) {
        t.cbrt()
    } else {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    }
}

/// A perceptual color-difference metric.
///
/// Implementations must be deterministic: the same pair always yields the same
/// distance. Only the ordering of distances is relied upon.
pub trait ColorDifference {
    fn difference(&self, a: Color, b: Color) -> f64;
}

/// CIEDE2000 over CIELAB (D65). The default metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ciede2000;

impl ColorDifference for Ciede2000 {
    fn difference(&self, a: Color, b: Color) -> f64 {
        LabColor::from_rgb(a).ciede2000(&LabColor::from_rgb(b))
    }
}

/// CIE76 (Euclidean LAB) difference. Cheaper, less uniform in saturated blues.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cie76;

impl ColorDifference for Cie76 {
    fn difference(&self, a: Color, b: Color) -> f64 {
        LabColor::from_rgb(a).cie76(&LabColor::from_rgb(b))
    }
}

/// Selectable difference metric, as used in config files and on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MetricName {
    #[default]
    #[value(name = "ciede2000")]
    Ciede2000,
    #[value(name = "cie76")]
    Cie76,
}

impl MetricName {
    pub fn metric(&self) -> &'static dyn ColorDifference {
        match self {
            MetricName::Ciede2000 => &Ciede2000,
            MetricName::Cie76 => &Cie76,
        }
    }
}
