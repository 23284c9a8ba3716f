// SPDX-License-Identifier: MIT
//
// String-level hex operations.
//
// These mirror the contract callers rely on at the UI boundary: a hex color
// is `#` plus 3 or 6 hex digits, case-insensitive. Validation is a strict
// regex gate; conversion is lenient (the leading `#` is optional) and
// reports malformed input as `None` instead of an error.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::hsl::Hsl;
use crate::rgb::Rgb;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("hex pattern compiles")
});

/// `true` iff `input` is `#` followed by exactly 3 or 6 hex digits.
///
/// ```
/// use n_color::is_valid_hex;
///
/// assert!(is_valid_hex("#fff"));
/// assert!(is_valid_hex("#3B82F6"));
/// assert!(!is_valid_hex("3b82f6"));
/// ```
#[must_use]
pub fn is_valid_hex(input: &str) -> bool {
    HEX_PATTERN.is_match(input)
}

/// Parse a hex color, with or without the leading `#`.
///
/// Three-digit input is expanded by doubling each digit. Returns `None`
/// when the digits don't form a 6-digit hex value after expansion.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    parse_digits(hex.strip_prefix('#').unwrap_or(hex))
}

/// Format three channels as lowercase, zero-padded `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Convert a hex string to rounded HSL.
///
/// Malformed input degrades to black (`0, 0, 0`) rather than failing.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    hex_to_rgb(hex).map_or_else(
        || {
            debug!("unparseable hex color {hex:?}, using black");
            Hsl::default()
        },
        Rgb::to_hsl,
    )
}

/// Convert HSL to a canonical hex string. Out-of-range components are
/// clamped (see [`Hsl::to_rgb`]).
#[must_use]
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}

/// Parse bare digits (no `#`): `RGB` or `RRGGBB`.
pub(crate) fn parse_digits(s: &str) -> Option<Rgb> {
    let bytes = s.as_bytes();
    match bytes.len() {
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
