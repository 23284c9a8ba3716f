// SPDX-License-Identifier: MIT

//! WCAG relative luminance and a black-or-white text color pick.
//!
//! This is a single threshold heuristic, not a contrast optimizer: any
//! background brighter than [`LUMINANCE_THRESHOLD`] gets black text,
//! everything else gets white.

use crate::hex::hex_to_rgb;
use crate::rgb::Rgb;

/// Luminance above which black text reads better than white.
pub const LUMINANCE_THRESHOLD: f64 = 0.179;

/// Linearize one 8-bit sRGB channel (WCAG 2.0 transfer function).
#[inline]
fn channel_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r_lin = channel_to_linear(color.r);
    let g_lin = channel_to_linear(color.g);
    let b_lin = channel_to_linear(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

impl Rgb {
    /// Black or white, whichever reads better on top of `self`.
    #[must_use]
    pub fn contrast_color(self) -> Self {
        if relative_luminance(self) > LUMINANCE_THRESHOLD {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

/// Text color for a hex background. Unparseable input gets black.
#[must_use]
pub fn contrast_color(hex: &str) -> Rgb {
    hex_to_rgb(hex).map_or(Rgb::BLACK, Rgb::contrast_color)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
