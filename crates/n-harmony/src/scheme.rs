//! Scheme engine — color-theory rules applied to a single base color.
//!
//! Each scheme takes a base color, converts it once to HSL, and derives the
//! rest of the palette by rotating the hue and scaling saturation/lightness.
//! The first color of every result is the base itself, untouched.
//!
//! `Monochromatic` and `Analogous` honor the requested count. The other five
//! have a fixed structure and always return [`FIXED_LEN`] colors. Counts
//! above [`MAX_COUNT`] are capped there.

use log::debug;
use n_color::{Hsl, Rgb};
use serde::{Deserialize, Serialize};

/// Length of every fixed-structure scheme.
pub const FIXED_LEN: usize = 5;

/// Largest palette a counted scheme will produce.
pub const MAX_COUNT: usize = 256;

/// A color-theory rule for deriving a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scheme {
    /// One hue, stepped lightness and saturation.
    Monochromatic,
    /// 120-degree spacing plus the 60/180 in-betweens.
    Triadic,
    /// Base and its opposite, with softened tints of each.
    Complementary,
    /// Complement +/- 30 degrees.
    #[serde(alias = "split-complementary")]
    SplitComplementary,
    /// 90-degree spacing plus a 45-degree tint.
    Square,
    /// Complement with near-neighbor tints on both sides.
    Compound,
    /// Neighbors fanning out +/- 30 degrees at a time.
    ///
    /// Kept last: it catches every unknown name on deserialization.
    #[default]
    #[serde(other)]
    Analogous,
}

impl Scheme {
    /// Generate a palette from `base`.
    ///
    /// `count` only matters for `Monochromatic` and `Analogous`.
    #[must_use]
    pub fn generate(self, base: Rgb, count: usize) -> Vec<Rgb> {
        match self {
            Self::Monochromatic => monochromatic(base, count),
            Self::Analogous => analogous(base, count),
            Self::Triadic => triadic(base),
            Self::Complementary => complementary(base),
            Self::SplitComplementary => split_complementary(base),
            Self::Square => square(base),
            Self::Compound => compound(base),
        }
    }

    /// Whether the output length ignores the requested count.
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        !matches!(self, Self::Monochromatic | Self::Analogous)
    }

    /// Number of colors `generate` returns for `count`.
    #[must_use]
    pub const fn len_for(self, count: usize) -> usize {
        if self.is_fixed() {
            FIXED_LEN
        } else if count == 0 {
            1
        } else if count > MAX_COUNT {
            MAX_COUNT
        } else {
            count
        }
    }

    /// Canonical camelCase name of this scheme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "splitComplementary",
            Self::Square => "square",
            Self::Compound => "compound",
        }
    }

    /// Parse a scheme from its camelCase name, or the kebab-case spelling
    /// (`split-complementary`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "split-complementary" {
            return Some(Self::SplitComplementary);
        }
        Self::all().iter().find(|s| s.name() == name).copied()
    }

    /// Like [`from_name`](Self::from_name), falling back to `Analogous`.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            debug!("unknown scheme {name:?}, using analogous");
            Self::Analogous
        })
    }

    /// All available schemes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic, Self::Analogous, Self::Triadic,
            Self::Complementary, Self::SplitComplementary, Self::Square,
            Self::Compound,
        ]
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Base followed by `count - 1` shades of the same hue.
///
/// Step `i` moves lightness by `15i - 30` (clamped to 10..=90) and
/// saturation by `10i - 20` (clamped to 20..=100).
#[must_use]
pub fn monochromatic(base: Rgb, count: usize) -> Vec<Rgb> {
    let count = count.min(MAX_COUNT);
    let hsl = base.to_hsl();
    let mut colors = Vec::with_capacity(count.max(1));
    colors.push(base);
    for i in 1..count {
        let i = i as f64;
        let s = (hsl.s + i * 10.0 - 20.0).clamp(20.0, 100.0);
        let l = (hsl.l + i * 15.0 - 30.0).clamp(10.0, 90.0);
        colors.push(Hsl::new(hsl.h, s, l).to_rgb());
    }
    colors
}

/// Base followed by neighbors alternating sides of the wheel:
/// -30, +30, -60, +60, ... degrees.
///
/// Even steps also gain 10 saturation and 5 lightness, odd steps lose them,
/// with saturation kept in 40..=100 and lightness in 20..=80.
#[must_use]
pub fn analogous(base: Rgb, count: usize) -> Vec<Rgb> {
    let count = count.min(MAX_COUNT);
    let hsl = base.to_hsl();
    let mut colors = Vec::with_capacity(count.max(1));
    colors.push(base);
    for i in 1..count {
        let even = i % 2 == 0;
        let (offset, s_nudge, l_nudge) = if even {
            (30.0 * (i / 2) as f64, 10.0, 5.0)
        } else {
            (-30.0 * i.div_ceil(2) as f64, -10.0, -5.0)
        };
        let shifted = Hsl::new(
            hsl.h,
            (hsl.s + s_nudge).clamp(40.0, 100.0),
            (hsl.l + l_nudge).clamp(20.0, 80.0),
        );
        colors.push(shifted.rotate(offset).to_rgb());
    }
    colors
}

/// Base, +120, +240, +60, +180, all at the base's saturation and lightness.
#[must_use]
pub fn triadic(base: Rgb) -> Vec<Rgb> {
    let hsl = base.to_hsl();
    let mut colors = vec![base];
    colors.extend([120.0, 240.0, 60.0, 180.0].map(|d| hsl.rotate(d).to_rgb()));
    colors
}

/// Base, complement, then tints: base and complement at S×0.8/L×1.2, and
/// a paler base at S×0.6/L×1.4.
#[must_use]
pub fn complementary(base: Rgb) -> Vec<Rgb> {
    let hsl = base.to_hsl();
    let comp = hsl.rotate(180.0);
    vec![
        base,
        comp.to_rgb(),
        hsl.scale(0.8, 1.2).to_rgb(),
        comp.scale(0.8, 1.2).to_rgb(),
        hsl.scale(0.6, 1.4).to_rgb(),
    ]
}

/// Base, complement +30, complement -30, then a base tint (S×0.7/L×1.3)
/// and a muted complement (S×0.9/L×0.9).
#[must_use]
pub fn split_complementary(base: Rgb) -> Vec<Rgb> {
    let hsl = base.to_hsl();
    let comp = hsl.rotate(180.0);
    vec![
        base,
        comp.rotate(30.0).to_rgb(),
        comp.rotate(-30.0).to_rgb(),
        hsl.scale(0.7, 1.3).to_rgb(),
        comp.scale(0.9, 0.9).to_rgb(),
    ]
}

/// Base, +90, +180, +270, and a +45 tint at S×0.8/L×1.1.
#[must_use]
pub fn square(base: Rgb) -> Vec<Rgb> {
    let hsl = base.to_hsl();
    let mut colors = vec![base];
    colors.extend([90.0, 180.0, 270.0].map(|d| hsl.rotate(d).to_rgb()));
    colors.push(hsl.rotate(45.0).scale(0.8, 1.1).to_rgb());
    colors
}

/// Base, complement, then tints at +30 (S×0.9/L×1.1), +210 (S×0.9/L×0.9)
/// and +60 (S×0.8/L×1.2).
#[must_use]
pub fn compound(base: Rgb) -> Vec<Rgb> {
    let hsl = base.to_hsl();
    vec![
        base,
        hsl.rotate(180.0).to_rgb(),
        hsl.rotate(30.0).scale(0.9, 1.1).to_rgb(),
        hsl.rotate(210.0).scale(0.9, 0.9).to_rgb(),
        hsl.rotate(60.0).scale(0.8, 1.2).to_rgb(),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
