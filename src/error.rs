// SPDX-License-Identifier: MIT

//! Errors from loading and saving palette settings.
//!
//! Palette generation itself never fails; only the settings file boundary
//! can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("settings I/O failed for {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML for `PaletteSettings`.
    #[error("invalid palette settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured palette size is larger than any scheme produces.
    #[error("palette count {count} exceeds the maximum of {max}")]
    InvalidCount { count: usize, max: usize },

    /// Settings could not be rendered as TOML.
    #[error("could not serialize palette settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
