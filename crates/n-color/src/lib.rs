// SPDX-License-Identifier: MIT
//
// n-color — color space plumbing for n-palette.
//
// Everything here is a pure function over small value types. The palette
// engine works in HSL (cheap hue rotation, direct saturation/lightness
// scaling) and speaks hex at its edges:
//
//   "#3b82f6" ─ hex ─▶ Rgb ─▶ Hsl ─ (rotate / scale) ─▶ Hsl ─▶ Rgb ─▶ "#rrggbb"
//
// Malformed input never panics and never errors on the string-level
// operations. Each one substitutes a documented default instead (black
// HSL, black contrast color, "Unknown" name, passthrough formatting).

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// r/g/b and h/s/l pairs are inherently similar.
#![allow(clippy::similar_names)]
// Textbook HSL formulas. Fused multiply-add would move rounding ties.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod error;
pub mod format;
pub mod hex;
pub mod hsl;
pub mod name;
pub mod random;
pub mod rgb;

pub use contrast::{contrast_color, relative_luminance};
pub use error::ParseHexError;
pub use format::{ColorFormat, format_color};
pub use hex::{hex_to_hsl, hex_to_rgb, hsl_to_hex, is_valid_hex, rgb_to_hex};
pub use hsl::Hsl;
pub use name::color_name;
pub use random::{random_color, random_color_with};
pub use rgb::Rgb;
