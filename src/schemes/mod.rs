//! Byte-to-color classification schemes.
//!
//! A scheme is an immutable value: a total table from every byte to a color,
//! plus the reverse relation grouped into classes (all bytes sharing one
//! color). Categorical schemes have a handful of large classes; gradient
//! schemes have 256 singleton classes and invert exactly.
//!
//! Reverse lookup follows a small decision table:
//!
//! | lookup    | hint    | result                                        |
//! |-----------|---------|-----------------------------------------------|
//! | `Exact`   | any     | random byte of the matching class, or `None`  |
//! | `Closest` | `None`  | random byte of the perceptually nearest class |
//! | `Closest` | `Some`  | byte of the nearest class closest to the hint |

mod tables;

use crate::color::{Ciede2000, Color, ColorDifference};
use crate::error::BinvisError;
use image::Rgb;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Builtin scheme selector, as used in config files and on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SchemeName {
    /// Five byte classes: zero, control, printable, high, all-ones
    #[default]
    Categorical,
    /// 256-step dark-to-bright gradient
    #[serde(alias = "magnitude-gradient")]
    #[value(alias = "magnitude-gradient")]
    Magnitude,
    /// 256 high-contrast colors, one per byte value
    #[serde(alias = "detail-gradient")]
    #[value(alias = "detail-gradient")]
    Detail,
}

impl SchemeName {
    pub const ALL: [SchemeName; 3] =
        [SchemeName::Categorical, SchemeName::Magnitude, SchemeName::Detail];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeName::Categorical => "categorical",
            SchemeName::Magnitude => "magnitude",
            SchemeName::Detail => "detail",
        }
    }

    /// Construct the scheme this name refers to.
    pub fn build(&self) -> ColorScheme {
        match self {
            SchemeName::Categorical => categorical(),
            SchemeName::Magnitude => ColorScheme::gradient("magnitude", &tables::MAGNITUDE),
            SchemeName::Detail => ColorScheme::gradient("detail", &tables::DETAIL),
        }
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeName {
    type Err = BinvisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "categorical" => Ok(SchemeName::Categorical),
            "magnitude" | "magnitude-gradient" => Ok(SchemeName::Magnitude),
            "detail" | "detail-gradient" => Ok(SchemeName::Detail),
            _ => Err(BinvisError::UnknownScheme(s.to_string())),
        }
    }
}

/// Returns a list of all available builtin scheme names.
pub fn list_builtins() -> Vec<&'static str> {
    SchemeName::ALL.iter().map(SchemeName::as_str).collect()
}

/// Returns a builtin scheme by name, or None if not found.
pub fn get_builtin(name: &str) -> Option<ColorScheme> {
    name.parse::<SchemeName>().ok().map(|n| n.build())
}

/// Whether colors are shared between byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeKind {
    /// Many bytes per color
    Categorical,
    /// Exactly one byte per color
    Gradient,
}

/// How [`ColorScheme::color_to_byte`] matches a color to a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    /// Only colors of the scheme match
    #[default]
    Exact,
    /// Any color matches its perceptually nearest class
    Closest,
}

/// All byte values that share one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorClass {
    /// Class label for categorical schemes
    pub name: Option<&'static str>,
    pub color: Color,
    /// Member bytes in ascending order
    pub bytes: Vec<u8>,
}

impl ColorClass {
    /// Member byte numerically closest to `hint`; ties go to the lower value.
    pub fn nearest_to(&self, hint: u8) -> u8 {
        let mut best = self.bytes[0];
        for &b in &self.bytes[1..] {
            if b.abs_diff(hint) < best.abs_diff(hint) {
                best = b;
            }
        }
        best
    }

    /// Uniformly random member byte.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        // Classes are built from at least one byte.
        self.bytes[rng.random_range(0..self.bytes.len())]
    }
}

/// An immutable byte/color classification.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    name: &'static str,
    kind: SchemeKind,
    colors: [Color; 256],
    /// Classes in order of their smallest member byte
    classes: Vec<ColorClass>,
    by_color: HashMap<Color, usize>,
}

impl ColorScheme {
    fn from_colors(
        name: &'static str,
        colors: [Color; 256],
        label: impl Fn(u8) -> Option<&'static str>,
    ) -> Self {
        let mut classes: Vec<ColorClass> = Vec::new();
        let mut by_color = HashMap::new();
        for byte in 0..=255u8 {
            let color = colors[byte as usize];
            let idx = *by_color.entry(color).or_insert_with(|| {
                classes.push(ColorClass { name: label(byte), color, bytes: Vec::new() });
                classes.len() - 1
            });
            classes[idx].bytes.push(byte);
        }

        let kind =
            if classes.len() == 256 { SchemeKind::Gradient } else { SchemeKind::Categorical };
        Self { name, kind, colors, classes, by_color }
    }

    /// Build a scheme from one `0xRRGGBB` value per byte.
    pub fn gradient(name: &'static str, table: &[u32; 256]) -> Self {
        let mut colors = [Rgb([0, 0, 0]); 256];
        for (slot, value) in colors.iter_mut().zip(table) {
            *slot = tables::rgb(*value);
        }
        Self::from_colors(name, colors, |_| None)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> SchemeKind {
        self.kind
    }

    pub fn classes(&self) -> &[ColorClass] {
        &self.classes
    }

    /// Color of a byte value. Total over all 256 inputs.
    pub fn byte_to_color(&self, byte: u8) -> Color {
        self.colors[byte as usize]
    }

    /// Class whose color equals `color` exactly.
    pub fn exact_class(&self, color: Color) -> Option<&ColorClass> {
        self.by_color.get(&color).map(|&idx| &self.classes[idx])
    }

    /// Class whose color is nearest to `color` under `metric`.
    ///
    /// Ties keep the class seen first.
    pub fn closest_class(&self, color: Color, metric: &dyn ColorDifference) -> &ColorClass {
        if let Some(class) = self.exact_class(color) {
            return class;
        }
        let mut best = &self.classes[0];
        let mut best_diff = metric.difference(best.color, color);
        for class in &self.classes[1..] {
            let diff = metric.difference(class.color, color);
            if diff < best_diff {
                best = class;
                best_diff = diff;
            }
        }
        best
    }

    /// Representative byte for `color`, using CIEDE2000 for closest matching.
    ///
    /// Returns `None` only in [`Lookup::Exact`] mode when the color is not
    /// part of the scheme.
    pub fn color_to_byte<R: Rng + ?Sized>(
        &self,
        color: Color,
        lookup: Lookup,
        hint: Option<u8>,
        rng: &mut R,
    ) -> Option<u8> {
        self.color_to_byte_with(color, lookup, hint, &Ciede2000, rng)
    }

    /// [`ColorScheme::color_to_byte`] with an explicit difference metric.
    pub fn color_to_byte_with<R: Rng + ?Sized>(
        &self,
        color: Color,
        lookup: Lookup,
        hint: Option<u8>,
        metric: &dyn ColorDifference,
        rng: &mut R,
    ) -> Option<u8> {
        match lookup {
            Lookup::Exact => self.exact_class(color).map(|class| class.choose(rng)),
            Lookup::Closest => {
                let class = self.closest_class(color, metric);
                Some(match hint {
                    Some(hint) => class.nearest_to(hint),
                    None => class.choose(rng),
                })
            }
        }
    }

    /// Uniformly random class of the scheme.
    pub fn random_class<R: Rng + ?Sized>(&self, rng: &mut R) -> &ColorClass {
        &self.classes[rng.random_range(0..self.classes.len())]
    }

    /// Uniformly random color among the scheme's classes.
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.random_class(rng).color
    }
}

fn categorical() -> ColorScheme {
    let mut colors = [Rgb([0, 0, 0]); 256];
    for (byte, slot) in colors.iter_mut().enumerate() {
        *slot = tables::rgb(tables::categorical_class(byte as u8).1);
    }
    ColorScheme::from_colors("categorical", colors, |byte| {
        Some(tables::categorical_class(byte).0)
    })
}
