// SPDX-License-Identifier: MIT
//
// n-palette — harmonious color palettes from a single base color.
//
// This crate wires the workspace together:
//
//   n-color   → hex / RGB / HSL conversion, contrast, naming, formatting
//   n-harmony → color-theory schemes and mood profiles
//
// and adds the orchestration step on top: generate a scheme, run it
// through a mood, then lay the caller's pinned colors over the result.
//
// The whole pipeline is pure. Every call takes plain values and returns
// plain values; persistence and change tracking belong to the caller,
// who owns a `PaletteSettings` plus a list of `Pin`s and re-runs
// `generate_palette` whenever one of them changes.

pub mod error;
pub mod palette;
pub mod settings;

pub use error::SettingsError;
pub use palette::{Pin, generate_palette, overlay_pins};
pub use settings::PaletteSettings;

pub use n_color::{
    ColorFormat, Hsl, ParseHexError, Rgb, color_name, contrast_color, format_color, hex_to_hsl,
    hex_to_rgb, hsl_to_hex, is_valid_hex, random_color, random_color_with, relative_luminance,
    rgb_to_hex,
};
pub use n_harmony::{Mood, Scheme, apply_mood};
