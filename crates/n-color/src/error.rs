// SPDX-License-Identifier: MIT

//! Typed parse failures for the strict `Rgb: FromStr` entry point.
//!
//! The lenient string helpers in [`crate::hex`] never produce these; they
//! return `None` or a default instead.

use thiserror::Error;

/// Why a string was rejected as a `#RGB` / `#RRGGBB` color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHexError {
    /// The string does not start with `#`.
    #[error("hex color must start with '#'")]
    MissingHash,

    /// Wrong number of digits after the `#`.
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
