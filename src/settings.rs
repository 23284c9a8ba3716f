// SPDX-License-Identifier: MIT
//
// Caller-owned palette settings.
//
// The inputs that drive palette generation (base color, scheme, count,
// mood, export format) live in one plain struct the caller owns, loads and
// saves. Nothing here watches for changes: the caller decides when the
// inputs changed and calls `generate` again.
//
// Example settings file:
//
//   base_color = "#3b82f6"
//   scheme = "splitComplementary"
//   count = 6
//   mood = "calm"
//   format = "rgb"
//
// Every key is optional. Unknown scheme names fall back to analogous,
// unknown moods to balanced, and unknown formats to rgb. A count above
// `MAX_COUNT` is rejected.

use std::fs;
use std::path::Path;

use log::debug;
use n_color::{ColorFormat, Rgb, format_color};
use n_harmony::scheme::MAX_COUNT;
use n_harmony::{Mood, Scheme};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::palette::{Pin, generate_palette};

/// Base color used when none is configured.
pub const DEFAULT_BASE_COLOR: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

/// Palette size used when none is configured.
pub const DEFAULT_COUNT: usize = 5;

/// Everything that drives one palette generation, except pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub base_color: Rgb,
    pub scheme: Scheme,
    pub count: usize,
    pub mood: Mood,
    pub format: ColorFormat,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR,
            scheme: Scheme::default(),
            count: DEFAULT_COUNT,
            mood: Mood::default(),
            format: ColorFormat::default(),
        }
    }
}

impl PaletteSettings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the values serde cannot bound on its own.
    pub const fn validate(&self) -> Result<()> {
        if self.count > MAX_COUNT {
            return Err(SettingsError::InvalidCount { count: self.count, max: MAX_COUNT });
        }
        Ok(())
    }

    /// Render settings as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!("loaded palette settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a TOML file, replacing it if present.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_toml_string()?).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate the palette these settings describe.
    #[must_use]
    pub fn generate(&self, pins: &[Pin]) -> Vec<Rgb> {
        generate_palette(self.base_color, self.scheme, self.count, self.mood, pins)
    }

    /// Generate the palette and render each color in `self.format`.
    #[must_use]
    pub fn formatted(&self, pins: &[Pin]) -> Vec<String> {
        self.generate(pins)
            .iter()
            .map(|c| format_color(&c.to_hex(), self.format))
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
