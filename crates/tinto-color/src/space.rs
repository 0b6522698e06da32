// SPDX-License-Identifier: MIT
//
// Hex ⇄ OKLCH boundary and perceptual distance metrics.
//
// These are the string-facing entry points the theme engine calls. The
// fail-closed variants never return an error: malformed input becomes
// opaque black and a `tracing` warning, so one bad seed color cannot abort
// a whole theme build. `try_hex_to_oklch` is the strict variant for callers
// that must tell "black" apart from "garbage".

use crate::color::{Color, hue_diff, parse_hex6};
use crate::error::ColorError;

/// Oklab distances are ~0.0–1.0; scaling by 100 puts them on the familiar
/// ΔE scale where ~2 is barely noticeable and > 20 is very different.
const DELTA_E_SCALE: f32 = 100.0;

/// Normalize a hex color to lowercase `#rrggbb`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] unless the input is exactly six hex
/// digits with an optional leading `#`.
pub fn normalize_hex(hex: &str) -> Result<String, ColorError> {
    let (r, g, b) = parse_hex6(hex)?;
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}

/// Strictly parse a hex string into OKLCH.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] for malformed input.
pub fn try_hex_to_oklch(hex: &str) -> Result<Color, ColorError> {
    Color::hex(hex)
}

/// Parse a hex string into OKLCH, failing closed to opaque black.
#[must_use]
pub fn hex_to_oklch(hex: &str) -> Color {
    match try_hex_to_oklch(hex) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!(input = hex, error = %err, "hex parse failed, using black");
            Color::BLACK
        }
    }
}

/// Encode an OKLCH color as `#rrggbb`.
///
/// Lightness is clamped to `[0, 1]` and chroma to `>= 0`, then the color is
/// gamut-mapped by chroma reduction so lightness and hue survive the trip
/// into sRGB. Non-finite input encodes as `#000000`.
#[must_use]
pub fn oklch_to_hex(color: Color) -> String {
    if let Err(err) = color.check_finite() {
        tracing::warn!(error = %err, "cannot encode color, using #000000");
        return "#000000".to_string();
    }
    Color::oklch(color.l.clamp(0.0, 1.0), color.c.max(0.0), color.h)
        .to_gamut()
        .to_hex()
}

/// Perceptual difference between two hex colors (Oklab ΔE × 100).
///
/// 0 means identical; values above ~20 read as clearly different colors.
#[must_use]
pub fn delta_e(hex1: &str, hex2: &str) -> f32 {
    let a = hex_to_oklch(hex1);
    let b = hex_to_oklch(hex2);
    a.distance(&b) * DELTA_E_SCALE
}

/// Circular hue distance in degrees, in `[0, 180]`.
#[must_use]
pub fn hue_difference(hex1: &str, hex2: &str) -> f32 {
    hue_diff(hex_to_oklch(hex1).h, hex_to_oklch(hex2).h)
}

/// Absolute OKLCH lightness difference, in `[0, 1]`.
#[must_use]
pub fn lightness_difference(hex1: &str, hex2: &str) -> f32 {
    (hex_to_oklch(hex1).l - hex_to_oklch(hex2).l).abs()
}
