//! Mood profiles — a uniform post-processing pass over a palette.
//!
//! Each color is adjusted on its own in HSL; colors never influence each
//! other. `Balanced` is the identity profile and hands colors back
//! untouched, without an HSL round trip.

use log::debug;
use n_color::{Hsl, Rgb};
use serde::{Deserialize, Serialize};

/// How a generated palette is reshaped before it reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Muted and a little lighter.
    Calm,
    /// More saturated, a little darker.
    Energetic,
    /// Half saturation, lightness snapped to 40 or 60.
    Professional,
    /// Cool hues pulled to orange.
    Warm,
    /// Warm hues pulled to sky blue.
    Cool,
    /// No adjustment.
    #[default]
    #[serde(other)]
    Balanced,
}

impl Mood {
    /// Adjust a single color.
    #[must_use]
    pub fn adjust(self, color: Rgb) -> Rgb {
        if self == Self::Balanced {
            return color;
        }
        self.adjust_hsl(color.to_hsl()).to_rgb()
    }

    /// The HSL transform behind [`adjust`](Self::adjust).
    #[must_use]
    pub fn adjust_hsl(self, hsl: Hsl) -> Hsl {
        let Hsl { h, s, l } = hsl;
        match self {
            Self::Calm => Hsl::new(h, (s * 0.7).max(30.0), (l * 1.1).min(70.0)),
            Self::Energetic => Hsl::new(h, (s * 1.3).min(100.0), l * 0.9),
            Self::Professional => {
                let l = if l > 50.0 { 40.0 } else { 60.0 };
                Hsl::new(h, (s * 0.5).max(20.0), l)
            }
            Self::Warm => {
                let h = if h < 60.0 || h > 300.0 { h } else { 30.0 };
                Hsl::new(h, (s * 1.1).min(80.0), l)
            }
            Self::Cool => {
                let h = if (60.0..=240.0).contains(&h) { h } else { 200.0 };
                Hsl::new(h, (s * 0.9).min(70.0), (l * 1.05).min(80.0))
            }
            Self::Balanced => hsl,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Professional => "professional",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Balanced => "balanced",
        }
    }

    /// Parse a mood from its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|m| m.name() == name).copied()
    }

    /// Like [`from_name`](Self::from_name), with unknown names meaning
    /// "no adjustment".
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            debug!("unknown mood {name:?}, leaving colors unadjusted");
            Self::Balanced
        })
    }

    /// All available moods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Calm, Self::Energetic, Self::Professional,
            Self::Warm, Self::Cool, Self::Balanced,
        ]
    }
}

/// Apply `mood` to every color, preserving order and length.
#[must_use]
pub fn apply_mood(colors: &[Rgb], mood: Mood) -> Vec<Rgb> {
    colors.iter().map(|&c| mood.adjust(c)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::analogous;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const GRAY: Rgb = Rgb::new(128, 128, 128);

    fn hexes(colors: &[Rgb]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex()).collect()
    }

    fn brand_palette() -> Vec<Rgb> {
        analogous(Rgb::new(0x3b, 0x82, 0xf6), 5)
    }

    // ── Per-mood outputs ────────────────────────────────────────────

    #[test]
    fn calm() {
        assert_eq!(
            hexes(&apply_mood(&brand_palette(), Mood::Calm)),
            ["#719be0", "#61c6d3", "#897de8", "#61d3a8", "#bf7de8"]
        );
    }

    #[test]
    fn energetic() {
        assert_eq!(
            hexes(&apply_mood(&brand_palette(), Mood::Energetic)),
            ["#146eff", "#00dffc", "#442bff", "#00fc9c", "#ae2bff"]
        );
    }

    #[test]
    fn professional() {
        assert_eq!(
            hexes(&apply_mood(&brand_palette(), Mood::Professional)),
            ["#385b94", "#3d868f", "#3f3399", "#3d8f70", "#723399"]
        );
    }

    #[test]
    fn warm() {
        assert_eq!(
            hexes(&apply_mood(&brand_palette(), Mood::Warm)),
            ["#eb9947", "#e88c30", "#eda65e", "#e88c30", "#eda65e"]
        );
    }

    #[test]
    fn cool() {
        assert_eq!(
            hexes(&apply_mood(&brand_palette(), Mood::Cool)),
            ["#5f91e3", "#48cddf", "#75c1e7", "#48dfa5", "#75c1e7"]
        );
    }

    // ── Hue rules ───────────────────────────────────────────────────

    #[test]
    fn warm_keeps_red_and_pulls_green_and_blue_to_orange() {
        assert_eq!(
            hexes(&apply_mood(&[RED, GREEN, BLUE], Mood::Warm)),
            ["#e61919", "#e68019", "#e68019"]
        );
    }

    #[test]
    fn cool_keeps_green_and_blue_and_pulls_red_to_sky() {
        assert_eq!(
            hexes(&apply_mood(&[RED, GREEN, BLUE], Mood::Cool)),
            ["#31a2db", "#31db31", "#3131db"]
        );
    }

    #[test]
    fn cool_range_is_inclusive() {
        let at_edge = Mood::Cool.adjust_hsl(Hsl::new(240.0, 50.0, 50.0));
        assert_eq!(at_edge.h, 240.0);
        let past_edge = Mood::Cool.adjust_hsl(Hsl::new(241.0, 50.0, 50.0));
        assert_eq!(past_edge.h, 200.0);
    }

    #[test]
    fn warm_range_is_exclusive() {
        assert_eq!(Mood::Warm.adjust_hsl(Hsl::new(60.0, 50.0, 50.0)).h, 30.0);
        assert_eq!(Mood::Warm.adjust_hsl(Hsl::new(300.0, 50.0, 50.0)).h, 30.0);
        assert_eq!(Mood::Warm.adjust_hsl(Hsl::new(301.0, 50.0, 50.0)).h, 301.0);
    }

    #[test]
    fn professional_snaps_lightness() {
        assert_eq!(Mood::Professional.adjust_hsl(Hsl::new(0.0, 80.0, 51.0)).l, 40.0);
        assert_eq!(Mood::Professional.adjust_hsl(Hsl::new(0.0, 80.0, 50.0)).l, 60.0);
    }

    #[test]
    fn calm_floors_saturation_even_for_grays() {
        // Gray has S=0, so calm lifts it to 30 at hue 0.
        assert_eq!(Mood::Calm.adjust(GRAY), Rgb::new(0xaf, 0x6a, 0x6a));
    }

    // ── Identity ────────────────────────────────────────────────────

    #[test]
    fn balanced_is_identity() {
        let palette = brand_palette();
        assert_eq!(apply_mood(&palette, Mood::Balanced), palette);
    }

    #[test]
    fn unknown_mood_is_identity() {
        let palette = brand_palette();
        assert_eq!(apply_mood(&palette, Mood::resolve("melancholy")), palette);
    }

    #[test]
    fn empty_palette() {
        assert!(apply_mood(&[], Mood::Calm).is_empty());
    }

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn names_roundtrip() {
        for &mood in Mood::all() {
            assert_eq!(Mood::from_name(mood.name()), Some(mood));
        }
        assert_eq!(Mood::from_name("Calm"), None);
    }

    // ── Properties ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn preserves_length(
            colors in proptest::collection::vec(any::<(u8, u8, u8)>().prop_map(Rgb::from), 0..12),
            mood_idx in 0usize..6,
        ) {
            let mood = Mood::all()[mood_idx];
            prop_assert_eq!(apply_mood(&colors, mood).len(), colors.len());
        }
    }
}
