// SPDX-License-Identifier: MIT
//
// The OKLCH color value and the math that moves it in and out of sRGB.
//
//   #rrggbb ⇄ sRGB (gamma) ⇄ linear sRGB ⇄ LMS ⇄ Oklab ⇄ OKLCH
//
// Derived shades are computed in OKLCH so equal numeric offsets look like
// equal visual steps. When an offset leaves the sRGB gamut, chroma is
// given up first; lightness and hue are what a theme is built around.

// l, c, h, r, g, b, a: the usual color-science notation.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Channel tolerance when deciding whether a color is displayable.
const GAMUT_EPSILON: f32 = 1e-4;

/// Chroma below this is treated as gray (hue carries no meaning).
const ACHROMATIC_CHROMA: f32 = 1e-5;

/// Bisection rounds for gamut mapping; 2^-16 of the chroma range.
const GAMUT_SEARCH_ROUNDS: u32 = 16;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color: OKLCH plus alpha.
///
/// ```
/// use tinto_color::Color;
///
/// let blue = Color::hex("#3b82f6").unwrap();
/// let hover = blue.set_lightness(blue.l - 0.10);
/// assert!(hover.l < blue.l);
/// assert_eq!(Color::BLACK.to_hex(), "#000000");
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Color {
    /// Perceived lightness, 0.0 (black) to 1.0 (white).
    pub l: f32,
    /// Colorfulness, 0.0 for grays; sRGB tops out near 0.37.
    pub c: f32,
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f32,
    /// Opacity, 0.0 to 1.0. Defaults to opaque when deserialized.
    #[serde(default = "opaque")]
    pub alpha: f32,
}

const fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::oklcha(l, c, h, 1.0)
    }

    #[inline]
    #[must_use]
    pub const fn oklcha(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    /// From gamma-encoded sRGB channels in `[0, 1]`.
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
        let [l, a, b] = oklab_from_linear(linear);
        let c = a.hypot(b);
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            normalize_hue(b.atan2(a).to_degrees())
        };
        Self::oklch(l, c, h)
    }

    /// From 8-bit sRGB channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        let unit = |v: u8| f32::from(v) / 255.0;
        Self::srgb(unit(r), unit(g), unit(b))
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] unless the input is exactly six hex digits.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        let (r, g, b) = parse_hex6(s)?;
        Ok(Self::rgb8(r, g, b))
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// True for grays, where hue is undefined.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_CHROMA
    }

    #[inline]
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.l.is_finite() && self.c.is_finite() && self.h.is_finite() && self.alpha.is_finite()
    }

    /// `Ok(self)` when every component is a real number.
    ///
    /// # Errors
    ///
    /// [`ColorError::NonFinite`] naming the offending color.
    pub fn check_finite(self) -> Result<Self, ColorError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(ColorError::NonFinite(format!("{self:?}")))
        }
    }

    /// Whether sRGB can display this color (up to float noise).
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
        self.unclamped_srgb().iter().all(|ch| range.contains(ch))
    }

    /// Euclidean distance in Oklab. Under ~0.02 is hard to tell apart.
    #[must_use]
    pub fn distance(self, other: &Self) -> f32 {
        let [l1, a1, b1] = self.oklab();
        let [l2, a2, b2] = other.oklab();
        let (dl, da, db) = (l1 - l2, a1 - a2, b1 - b2);
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    // ─── Derivation ──────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Replace lightness, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn set_lightness(self, l: f32) -> Self {
        Self { l: l.clamp(0.0, 1.0), ..self }
    }

    /// Rotate hue by `degrees`, wrapping into `[0, 360)`.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self { h: normalize_hue(self.h + degrees), ..self }
    }

    /// Bring the color inside sRGB by lowering chroma only.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }
        let (mut fits, mut overflows) = (0.0_f32, self.c);
        for _ in 0..GAMUT_SEARCH_ROUNDS {
            let mid = (fits + overflows) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                fits = mid;
            } else {
                overflows = mid;
            }
        }
        Self { c: fits, ..self }
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Gamma-encoded sRGB, each channel clamped to `[0, 1]`.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let [r, g, b] = self.unclamped_srgb().map(|ch| ch.clamp(0.0, 1.0));
        (r, g, b)
    }

    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// `#rrggbb`, lowercase. Alpha is dropped.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbb` when opaque, else `rgba(r, g, b, a)` with `a` to 2 places.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            return self.to_hex();
        }
        let (r, g, b) = self.to_rgb8();
        let a = (self.alpha.clamp(0.0, 1.0) * 100.0).round() / 100.0;
        format!("rgba({r}, {g}, {b}, {a})")
    }

    fn oklab(self) -> [f32; 3] {
        let (sin, cos) = self.h.to_radians().sin_cos();
        [self.l, self.c * cos, self.c * sin]
    }

    fn unclamped_srgb(self) -> [f32; 3] {
        linear_from_oklab(self.oklab()).map(linear_to_srgb)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.1}", self.l, self.c, self.h)?;
        if !self.is_opaque() {
            write!(f, " / {:.2}", self.alpha)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Approximate equality. Hue is ignored when either side is gray.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        let close = |x: f32, y: f32| (x - y).abs() < EPS;
        close(self.l, other.l)
            && close(self.c, other.c)
            && close(self.alpha, other.alpha)
            && (self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Wrap an angle into `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let wrapped = h.rem_euclid(360.0);
    // Tiny negative inputs round up to exactly 360.0 in f32.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Shortest angular distance between two hues, in `[0, 180]`.
#[inline]
#[must_use]
pub fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

// ─── Transfer functions ──────────────────────────────────────────────────────

/// sRGB gamma encode of one linear channel.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// sRGB gamma decode of one encoded channel.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

// ─── Oklab matrices (Björn Ottosson) ────────────────────────────────────────

type Mat3 = [[f32; 3]; 3];

const LINEAR_TO_LMS: Mat3 = [
    [0.412_221_47, 0.536_332_55, 0.051_445_995],
    [0.211_903_5, 0.680_699_5, 0.107_396_96],
    [0.088_302_46, 0.281_718_84, 0.629_978_7],
];

const LMS_CBRT_TO_OKLAB: Mat3 = [
    [0.210_454_26, 0.793_617_8, -0.004_072_047],
    [1.977_998_5, -2.428_592_2, 0.450_593_7],
    [0.025_904_037, 0.782_771_77, -0.808_675_77],
];

const OKLAB_TO_LMS_CBRT: Mat3 = [
    [1.0, 0.396_337_78, 0.215_803_76],
    [1.0, -0.105_561_346, -0.063_854_17],
    [1.0, -0.089_484_18, -1.291_485_5],
];

const LMS_TO_LINEAR: Mat3 = [
    [4.076_741_7, -3.307_711_6, 0.230_969_94],
    [-1.268_438, 2.609_757_4, -0.341_319_38],
    [-0.004_196_086_3, -0.703_418_6, 1.707_614_7],
];

fn mul(m: Mat3, v: [f32; 3]) -> [f32; 3] {
    m.map(|row| row[2].mul_add(v[2], row[0].mul_add(v[0], row[1] * v[1])))
}

fn oklab_from_linear(rgb: [f32; 3]) -> [f32; 3] {
    mul(LMS_CBRT_TO_OKLAB, mul(LINEAR_TO_LMS, rgb).map(f32::cbrt))
}

fn linear_from_oklab(lab: [f32; 3]) -> [f32; 3] {
    mul(LMS_TO_LINEAR, mul(OKLAB_TO_LMS_CBRT, lab).map(|x| x * x * x))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Split `#rrggbb` / `rrggbb` into its three bytes.
pub(crate) fn parse_hex6(s: &str) -> Result<(u8, u8, u8), ColorError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(s.to_string()));
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (byte(0), byte(2), byte(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok((r, g, b)),
        _ => Err(ColorError::InvalidHex(s.to_string())),
    }
}

/// `[0, 1]` → `0..=255`, rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(v: f32) -> u8 {
    // Clamped into 0.0..=255.0 before the cast.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
