// SPDX-License-Identifier: MIT

//! Display formats for exporting palette colors.

use serde::{Deserialize, Serialize};

use crate::hex::hex_to_rgb;

/// How a color is rendered for display or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// Uppercase hex, e.g. `#3B82F6`.
    #[default]
    Hex,
    /// CSS functional notation, e.g. `rgb(59, 130, 246)`.
    #[serde(other)]
    Rgb,
}

impl ColorFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
        }
    }

    /// Anything other than `"hex"` means the `rgb(...)` form.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "hex" { Self::Hex } else { Self::Rgb }
    }
}

/// Render `hex` in the requested format.
///
/// `Hex` uppercases the input as given. `Rgb` needs a parseable color and
/// hands the input back unchanged when it isn't one.
#[must_use]
pub fn format_color(hex: &str, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => hex.to_uppercase(),
        ColorFormat::Rgb => hex_to_rgb(hex).map_or_else(
            || hex.to_owned(),
            |c| format!("rgb({}, {}, {})", c.r, c.g, c.b),
        ),
    }
}
