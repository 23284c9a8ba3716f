// SPDX-License-Identifier: MIT
//
// HSL in the units palette math wants:
// degrees and percentages.
//
// Palette generators scale saturation and lightness freely (`l * 1.4` on a
// light base easily passes 100), so an `Hsl` is allowed to sit outside its
// canonical range. The range is restored only at the single exit point,
// `to_rgb`:
//
//   hue         → wrapped into [0, 360)
//   saturation  → clamped to [0, 100]
//   lightness   → clamped to [0, 100]
//   channels    → rounded, then clamped to [0, 255]
//
// Over-bright tints therefore saturate at white instead of producing
// channel values the hex formatter can't represent.

use crate::rgb::Rgb;

/// A color in HSL space: `h` in degrees, `s` and `l` in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        Self { h: (self.h + degrees).rem_euclid(360.0), ..self }
    }

    /// Same hue, saturation and lightness multiplied by the given factors.
    ///
    /// No clamping happens here; see the module docs.
    #[must_use]
    pub fn scale(self, s_factor: f64, l_factor: f64) -> Self {
        Self { s: self.s * s_factor, l: self.l * l_factor, ..self }
    }

    /// Convert to 8-bit sRGB, clamping out-of-range components first.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        if s <= 0.0 {
            let v = to_u8(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_u8(hue_to_channel(p, q, h)),
            to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// Piecewise-linear channel ramp over the hue circle (`t` in turns).
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
