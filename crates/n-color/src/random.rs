// SPDX-License-Identifier: MIT

//! Uniform random colors over the full 24-bit space.

use rand::Rng;

use crate::rgb::Rgb;

/// A uniformly random color from the thread-local generator.
#[must_use]
pub fn random_color() -> Rgb {
    random_color_with(&mut rand::thread_rng())
}

/// A uniformly random color from `rng`, every value in `0..=0xFFFFFF`
/// equally likely.
pub fn random_color_with<R: Rng>(rng: &mut R) -> Rgb {
    Rgb::from_u32(rng.gen_range(0..=0x00FF_FFFF))
}
