// SPDX-License-Identifier: MIT
//
// 8-bit sRGB color — the value type every palette is made of.
//
// Display renders the canonical lowercase `#rrggbb` form, which is also the
// serde representation. Parsing accepts `#RGB` and `#RRGGBB` in any case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseHexError;
use crate::hex;
use crate::hsl::Hsl;

/// An 8-bit-per-channel sRGB color.
///
/// # Examples
///
/// ```
/// use n_color::Rgb;
///
/// let blue: Rgb = "#3b82f6".parse().unwrap();
/// assert_eq!(blue, Rgb::new(59, 130, 246));
/// assert_eq!(blue.to_string(), "#3b82f6");
///
/// // Short form expands each digit.
/// let white: Rgb = "#FFF".parse().unwrap();
/// assert_eq!(white, Rgb::WHITE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0xRRGGBB`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from `0xRRGGBB`. Bits above 24 are ignored.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Convert to HSL with every component rounded to the nearest integer.
    ///
    /// Hue lands in `[0, 360)`, saturation and lightness in `[0, 100]`.
    /// Grays (all channels equal) report hue and saturation 0.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let max8 = self.r.max(self.g).max(self.b);
        let min8 = self.r.min(self.g).min(self.b);

        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = f64::from(max8) / 255.0;
        let min = f64::from(min8) / 255.0;

        let l = (max + min) / 2.0;
        if max8 == min8 {
            return Hsl::new(0.0, 0.0, (l * 100.0).round());
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        // Position on the hue circle in sextants (0..6) of the dominant channel.
        let sextant = if max8 == self.r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max8 == self.g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(
            (sextant / 6.0 * 360.0).round() % 360.0,
            (s * 100.0).round(),
            (l * 100.0).round(),
        )
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({self})")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseHexError::MissingHash)?;
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(bad));
        }
        hex::parse_digits(digits).ok_or(ParseHexError::InvalidLength(digits.len()))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parse_long_form() {
        assert_eq!("#3b82f6".parse::<Rgb>(), Ok(Rgb::new(59, 130, 246)));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("#3B82F6".parse::<Rgb>(), "#3b82f6".parse::<Rgb>());
    }

    #[test]
    fn parse_short_form_duplicates_digits() {
        assert_eq!("#fa0".parse::<Rgb>(), Ok(Rgb::new(0xff, 0xaa, 0x00)));
    }

    #[test]
    fn parse_rejects_missing_hash() {
        assert_eq!("3b82f6".parse::<Rgb>(), Err(ParseHexError::MissingHash));
    }

    #[test]
    fn parse_rejects_bad_length() {
        assert_eq!("#ff".parse::<Rgb>(), Err(ParseHexError::InvalidLength(2)));
        assert_eq!("#ffff".parse::<Rgb>(), Err(ParseHexError::InvalidLength(4)));
    }

    #[test]
    fn parse_rejects_bad_digit() {
        assert_eq!("#gggggg".parse::<Rgb>(), Err(ParseHexError::InvalidDigit('g')));
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn display_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn debug_shows_hex() {
        assert_eq!(format!("{:?}", Rgb::new(1, 2, 3)), "Rgb(#010203)");
    }

    #[test]
    fn u32_packing() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_u32(), 0x12_34_56);
        assert_eq!(Rgb::from_u32(0x12_34_56), c);
        assert_eq!(Rgb::from_u32(0xff_12_34_56), c);
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_of_primaries() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0.0, 100.0, 50.0));
        assert_eq!(Rgb::new(0, 255, 0).to_hsl(), Hsl::new(120.0, 100.0, 50.0));
        assert_eq!(Rgb::new(0, 0, 255).to_hsl(), Hsl::new(240.0, 100.0, 50.0));
    }

    #[test]
    fn hsl_of_grays_is_achromatic() {
        assert_eq!(Rgb::BLACK.to_hsl(), Hsl::new(0.0, 0.0, 0.0));
        assert_eq!(Rgb::WHITE.to_hsl(), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(Rgb::new(128, 128, 128).to_hsl(), Hsl::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn hsl_of_brand_blue() {
        assert_eq!(Rgb::new(59, 130, 246).to_hsl(), Hsl::new(217.0, 91.0, 60.0));
    }

    #[test]
    fn hue_never_reaches_360() {
        // Red-dominant with blue slightly above green sits just under 360.
        let hsl = Rgb::new(255, 0, 1).to_hsl();
        assert!((0.0..360.0).contains(&hsl.h), "hue {}", hsl.h);
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn deserialize_from_hex_string() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, StrDeserializer};

        let de: StrDeserializer<'_, Error> = "#ABC".into_deserializer();
        assert_eq!(Rgb::deserialize(de), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
    }

    #[test]
    fn deserialize_rejects_garbage() {
        use serde::de::IntoDeserializer;
        use serde::de::value::{Error, StrDeserializer};

        let de: StrDeserializer<'_, Error> = "blue".into_deserializer();
        assert!(Rgb::deserialize(de).is_err());
    }
}
