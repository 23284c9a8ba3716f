// SPDX-License-Identifier: MIT

//! Coarse color naming by RGB thresholds.
//!
//! Buckets are tested in order and the first match wins, so some labels
//! are shadowed by earlier ones (every "Yellow" candidate is already
//! "Orange", and "Violet" repeats the "Purple" test). The thresholds are
//! kept as-is so names stay stable for existing palettes.

use crate::hex::hex_to_rgb;
use crate::rgb::Rgb;

/// The label vocabulary. "Yellow" and "Violet" are shadowed in practice.
pub const NAMES: &[&str] = &[
    "Red", "Orange", "Yellow", "Green", "Cyan", "Blue", "Purple", "Violet",
    "White", "Black", "Gray", "Color", "Unknown",
];

impl Rgb {
    /// Heuristic bucket name for this color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        let Self { r, g, b } = self;

        if r > 200 && g < 100 && b < 100 {
            return "Red";
        }
        if r > 200 && g > 150 && b < 100 {
            return "Orange";
        }
        if r > 200 && g > 200 && b < 100 {
            return "Yellow";
        }
        if r < 100 && g > 150 && b < 100 {
            return "Green";
        }
        if r < 100 && g > 150 && b > 150 {
            return "Cyan";
        }
        if r < 100 && g < 100 && b > 200 {
            return "Blue";
        }
        if r > 150 && g < 100 && b > 150 {
            return "Purple";
        }
        if r.abs_diff(g) < 30 && g.abs_diff(b) < 30 {
            return if r > 200 {
                "White"
            } else if r < 50 {
                "Black"
            } else {
                "Gray"
            };
        }

        "Color"
    }
}

/// Name a hex color. Unparseable input is `"Unknown"`.
#[must_use]
pub fn color_name(hex: &str) -> &'static str {
    hex_to_rgb(hex).map_or("Unknown", Rgb::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_buckets() {
        assert_eq!(color_name("#ff0000"), "Red");
        assert_eq!(color_name("#00ff00"), "Green");
        assert_eq!(color_name("#0000ff"), "Blue");
        assert_eq!(color_name("#00ffff"), "Cyan");
        assert_eq!(color_name("#ff00ff"), "Purple");
    }

    #[test]
    fn yellow_is_shadowed_by_orange() {
        assert_eq!(color_name("#ffa500"), "Orange");
        assert_eq!(color_name("#ffff00"), "Orange");
    }

    #[test]
    fn neutrals() {
        assert_eq!(color_name("#ffffff"), "White");
        assert_eq!(color_name("#000000"), "Black");
        assert_eq!(color_name("#808080"), "Gray");
        assert_eq!(color_name("#f0e8dc"), "White");
    }

    #[test]
    fn no_bucket_is_color() {
        assert_eq!(color_name("#3b82f6"), "Color");
    }

    #[test]
    fn invalid_is_unknown() {
        assert_eq!(color_name("#12"), "Unknown");
    }

    #[test]
    fn results_come_from_vocabulary() {
        for hex in ["#ff0000", "#ffa500", "#808080", "#3b82f6", "zz"] {
            assert!(NAMES.contains(&color_name(hex)));
        }
    }
}
