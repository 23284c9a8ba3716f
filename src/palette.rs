// SPDX-License-Identifier: MIT
//
// Palette orchestration — scheme, then mood, then pins.
//
//   base + Scheme + count ──▶ Scheme::generate ──▶ apply_mood ──▶ overlay_pins
//
// Pins are laid over the mood-adjusted palette, so a pinned color comes out
// exactly as the caller pinned it. The orchestrator keeps no state between
// calls; the caller re-runs it whenever any input changes.

use log::trace;
use n_color::Rgb;
use n_harmony::{Mood, Scheme, apply_mood};
use serde::{Deserialize, Serialize};

/// A caller-held override: palette slot `index` always shows `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pin {
    pub index: usize,
    pub color: Rgb,
}

impl Pin {
    #[must_use]
    pub const fn new(index: usize, color: Rgb) -> Self {
        Self { index, color }
    }
}

/// Generate a palette from `base`, adjust it for `mood`, and lay `pins`
/// over the result.
///
/// The output length is decided by the scheme alone (see
/// [`Scheme::len_for`]); pins pointing past the end are ignored.
///
/// ```
/// use n_palette::{Mood, Pin, Rgb, Scheme, generate_palette};
///
/// let base = Rgb::new(0x3b, 0x82, 0xf6);
/// let pinned = Rgb::new(0xab, 0xcd, 0xef);
/// let palette = generate_palette(base, Scheme::Triadic, 5, Mood::Calm, &[Pin::new(1, pinned)]);
///
/// assert_eq!(palette.len(), 5);
/// assert_eq!(palette[1], pinned);
/// ```
#[must_use]
pub fn generate_palette(
    base: Rgb,
    scheme: Scheme,
    count: usize,
    mood: Mood,
    pins: &[Pin],
) -> Vec<Rgb> {
    let raw = scheme.generate(base, count);
    let mut colors = apply_mood(&raw, mood);
    overlay_pins(&mut colors, pins);
    trace!(
        "{} palette from {base} ({} mood, {} pins): {colors:?}",
        scheme.name(),
        mood.name(),
        pins.len()
    );
    colors
}

/// Replace every pinned slot with its pinned color.
///
/// When two pins claim the same slot the first one wins.
pub fn overlay_pins(colors: &mut [Rgb], pins: &[Pin]) {
    for (i, slot) in colors.iter_mut().enumerate() {
        if let Some(pin) = pins.iter().find(|p| p.index == i) {
            *slot = pin.color;
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
