//! # n-harmony — color-theory schemes and mood profiles
//!
//! Turns one base color into an ordered palette, then reshapes the whole
//! palette to fit a mood. Both steps are pure functions over `n_color::Rgb`.
//!
//! # Architecture
//!
//! ```text
//! base color + Scheme + count
//!     │
//!     ▼
//! scheme.rs: rotate / scale the base in HSL (first color is always the base)
//!     │
//!     ▼
//! mood.rs:   per-color saturation / lightness / hue adjustment
//!     │
//!     ▼
//! Vec<Rgb>
//! ```
//!
//! # Color Space
//!
//! Generation happens in HSL with integer-rounded inputs. Scaled tints may
//! leave the canonical saturation/lightness range; `Hsl::to_rgb` clamps on
//! the way out, so every emitted color is a valid 6-digit hex value.

// Mathematical code uses small integer-to-float casts (loop indices, offsets).
#![allow(clippy::cast_precision_loss)]
// Textbook scale factors read better unfused.
#![allow(clippy::suboptimal_flops)]

pub mod mood;
pub mod scheme;

pub use mood::{Mood, apply_mood};
pub use scheme::Scheme;
