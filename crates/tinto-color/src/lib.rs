// SPDX-License-Identifier: MIT
//
// tinto-color — the color core for the tinto theme engine.
//
// Everything downstream (clamping, scales, contrast search, token
// assembly) works on `Color`, an OKLCH value with alpha. This crate owns
// the only conversions between that perceptual space and the 8-bit sRGB
// hex strings the outside world speaks, plus the distance metrics used
// to decide whether two seed colors are distinguishable.
//
// The crate is pure: no I/O and no global state. Diagnostics for
// fail-closed paths go through `tracing`, so the host decides whether
// anything is recorded.

pub mod color;
pub mod error;
pub mod space;

pub use color::Color;
pub use error::ColorError;
pub use space::{
    delta_e, hex_to_oklch, hue_difference, lightness_difference, normalize_hex, oklch_to_hex,
    try_hex_to_oklch,
};
