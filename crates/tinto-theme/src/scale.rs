// SPDX-License-Identifier: MIT
//! Scale generation from a single seed color.
//!
//! Every scale starts from a clamped base and applies fixed, signed OKLCH
//! offsets. Because the offsets are fixed per stop, lightness ordering is a
//! property of the table rather than something checked after the fact: stop
//! `25` is always the lightest and `950` the darkest.
//!
//! Builders never fail. A seed that does not parse yields the hard-coded
//! blue (or warm-gray) scale from [`crate::builtin`] and a warning.

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tinto_color::{Color, oklch_to_hex, try_hex_to_oklch};

use crate::builtin;
use crate::clamp::{ClampContext, clamp_oklch};
use crate::error::ThemeError;

/// Stop keys of an extended (brand) scale, lightest first.
pub const EXTENDED_STOPS: [u16; 8] = [25, 50, 100, 300, 600, 700, 900, 950];

/// Stop keys of the neutral scale, lightest first.
pub const NEUTRAL_STOPS: [u16; 8] = [0, 50, 100, 200, 300, 700, 900, 950];

/// Absolute lightness band every derived stop lands in.
const STOP_L_MIN: f32 = 0.02;
const STOP_L_MAX: f32 = 0.99;

/// Hue used for neutrals when no reference color is given (warm gray).
const NEUTRAL_DEFAULT_HUE: f32 = 60.0;

/// Per-stop offsets from the base: `(key, ΔL, ΔC, lightness ceiling)`.
///
/// The light stops carry their own ceilings, each below the previous one,
/// so a very light base cannot collapse two stops onto the same lightness.
const EXTENDED_OFFSETS: [(u16, f32, f32, f32); 8] = [
    (25, 0.40, -0.10, 0.99),
    (50, 0.34, -0.08, 0.98),
    (100, 0.26, -0.06, 0.96),
    (300, 0.12, -0.03, 0.93),
    (600, 0.0, 0.0, STOP_L_MAX),
    (700, -0.08, 0.0, STOP_L_MAX),
    (900, -0.22, -0.03, STOP_L_MAX),
    (950, -0.35, -0.05, STOP_L_MAX),
];

/// Neutral ladder: `(key, L, C)`.
const NEUTRAL_LADDER: [(u16, f32, f32); 8] = [
    (0, 0.99, 0.002),
    (50, 0.97, 0.004),
    (100, 0.94, 0.006),
    (200, 0.90, 0.008),
    (300, 0.84, 0.010),
    (700, 0.45, 0.015),
    (900, 0.25, 0.012),
    (950, 0.16, 0.010),
];

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// Ordered mapping from stop key to `#rrggbb`, lightest stop first.
///
/// Serializes as a JSON object keyed by stop (`{"25": "#…", …}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    stops: Vec<(u16, String)>,
}

/// Eight-stop brand scale (`25` … `950`).
pub type ExtendedScale = ColorScale;

/// Eight-stop hue-locked gray scale (`0` … `950`).
pub type NeutralScale = ColorScale;

impl ColorScale {
    pub(crate) fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u16, S)>,
        S: Into<String>,
    {
        Self {
            stops: pairs.into_iter().map(|(k, hex)| (k, hex.into())).collect(),
        }
    }

    /// Hex value at `key`, if the scale has that stop.
    #[must_use]
    pub fn stop(&self, key: u16) -> Option<&str> {
        self.stops
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, hex)| hex.as_str())
    }

    /// Stops in order, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.stops.iter().map(|(k, hex)| (*k, hex.as_str()))
    }

    /// Stop keys in order.
    pub fn keys(&self) -> impl Iterator<Item = u16> + '_ {
        self.stops.iter().map(|(k, _)| *k)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl Index<u16> for ColorScale {
    type Output = str;

    fn index(&self, key: u16) -> &str {
        match self.stop(key) {
            Some(hex) => hex,
            None => panic!("scale has no stop {key}"),
        }
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for (key, hex) in &self.stops {
            map.serialize_entry(&key.to_string(), hex)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// BasicScale / InteractionStates / Gradient
// ---------------------------------------------------------------------------

/// Three-stop scale around a base color.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BasicScale {
    pub light: String,
    pub base: String,
    pub dark: String,
}

/// Interactive-control variants of one color.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InteractionStates {
    pub base: String,
    pub hover: String,
    pub active: String,
    /// Same as `base`; consumers apply it with reduced alpha as a ring.
    pub focus: String,
    pub disabled: String,
}

/// One color stop of a [`Gradient`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GradientStop {
    pub color: String,
    pub position: u8,
}

/// Three-stop linear gradient and its CSS form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Gradient {
    pub css: String,
    pub stops: [GradientStop; 3],
}

impl Gradient {
    pub(crate) fn linear(angle: f32, colors: [&str; 3]) -> Self {
        let stops = [
            GradientStop { color: colors[0].to_string(), position: 0 },
            GradientStop { color: colors[1].to_string(), position: 50 },
            GradientStop { color: colors[2].to_string(), position: 100 },
        ];
        let css = format!(
            "linear-gradient({angle}deg, {} 0%, {} 50%, {} 100%)",
            stops[0].color, stops[1].color, stops[2].color
        );
        Self { css, stops }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Strictly parse a seed and clamp it into `context`.
fn clamped_base(hex: &str, context: ClampContext) -> Result<Color, ThemeError> {
    let color = try_hex_to_oklch(hex)?;
    Ok(clamp_oklch(color, context, true).color)
}

/// Encode a derived stop, clamped into the absolute band.
fn stop_hex(l: f32, c: f32, h: f32) -> String {
    clamp_oklch(Color::oklch(l, c.max(0.0), h), ClampContext::Ui, false).hex
}

/// Light / base / dark around the ui-clamped seed.
///
/// Light is `L + 0.12` (at most 0.95) with `C − 0.02`; dark is `L − 0.12`
/// (at least 0.05) with `C − 0.01`.
#[must_use]
pub fn build_scale(hex: &str) -> BasicScale {
    try_build_scale(hex).unwrap_or_else(|err| {
        tracing::warn!(input = hex, error = %err, "basic scale fell back to builtin");
        builtin::fallback_basic_scale()
    })
}

pub(crate) fn try_build_scale(hex: &str) -> Result<BasicScale, ThemeError> {
    let base = clamped_base(hex, ClampContext::Ui)?;
    Ok(BasicScale {
        light: stop_hex((base.l + 0.12).min(0.95), base.c - 0.02, base.h),
        base: oklch_to_hex(base),
        dark: stop_hex((base.l - 0.12).max(0.05), base.c - 0.01, base.h),
    })
}

/// Eight-stop scale with the ui-clamped seed at `600`.
///
/// Lightness is strictly decreasing from `25` to `950` for every seed.
#[must_use]
pub fn build_extended_scale(hex: &str) -> ExtendedScale {
    try_build_extended_scale(hex).unwrap_or_else(|err| {
        tracing::warn!(input = hex, error = %err, "extended scale fell back to builtin");
        builtin::fallback_extended_scale()
    })
}

pub(crate) fn try_build_extended_scale(hex: &str) -> Result<ExtendedScale, ThemeError> {
    let base = clamped_base(hex, ClampContext::Ui)?;
    let scale = ColorScale::from_pairs(EXTENDED_OFFSETS.iter().map(|&(key, dl, dc, ceiling)| {
        let l = (base.l + dl).min(ceiling).clamp(STOP_L_MIN, STOP_L_MAX);
        (key, stop_hex(l, base.c + dc, base.h))
    }));
    tracing::debug!(seed = hex, base = ?scale.stop(600), "built extended scale");
    Ok(scale)
}

/// Warm grays locked to the hue of `reference` (or 60° without one).
///
/// A reference that does not parse falls back to the builtin neutral scale.
#[must_use]
pub fn build_neutral_scale(reference: Option<&str>) -> NeutralScale {
    let hue = match reference.map(try_hex_to_oklch) {
        None => NEUTRAL_DEFAULT_HUE,
        Some(Ok(color)) if color.is_achromatic() => NEUTRAL_DEFAULT_HUE,
        Some(Ok(color)) => color.h,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "neutral scale fell back to builtin");
            return builtin::fallback_neutral_scale();
        }
    };
    neutral_scale_for_hue(hue)
}

pub(crate) fn neutral_scale_for_hue(hue: f32) -> NeutralScale {
    ColorScale::from_pairs(
        NEUTRAL_LADDER
            .iter()
            .map(|&(key, l, c)| (key, stop_hex(l, c, hue))),
    )
}

/// Hover, active, focus and disabled variants of a button color.
///
/// The base is clamped with the `button` context. Derived states are only
/// held to the absolute band so they stay visibly distinct from the base.
#[must_use]
pub fn build_interaction_states(hex: &str) -> InteractionStates {
    try_build_interaction_states(hex).unwrap_or_else(|err| {
        tracing::warn!(input = hex, error = %err, "interaction states fell back to builtin");
        builtin::fallback_interaction_states()
    })
}

pub(crate) fn try_build_interaction_states(hex: &str) -> Result<InteractionStates, ThemeError> {
    let base = clamped_base(hex, ClampContext::Button)?;
    let base_hex = oklch_to_hex(base);
    Ok(InteractionStates {
        hover: stop_hex(base.l - 0.10, base.c - 0.01, base.h),
        active: stop_hex(base.l - 0.14, base.c - 0.02, base.h),
        focus: base_hex.clone(),
        disabled: stop_hex(base.l, base.c * 0.2, base.h),
        base: base_hex,
    })
}

/// Brand gradient: primary base at 0%, primary light at 50%, secondary
/// dark at 100%.
#[must_use]
pub fn gradient_brand(primary_hex: &str, secondary_hex: &str, angle: f32) -> Gradient {
    let primary = build_scale(primary_hex);
    let secondary = build_scale(secondary_hex);
    Gradient::linear(angle, [&primary.base, &primary.light, &secondary.dark])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinto_color::hex_to_oklch;

    fn lightness(hex: &str) -> f32 {
        hex_to_oklch(hex).l
    }

    fn assert_strictly_darker(scale: &ColorScale) {
        let ls: Vec<(u16, f32)> = scale.iter().map(|(k, hex)| (k, lightness(hex))).collect();
        for pair in ls.windows(2) {
            assert!(
                pair[0].1 > pair[1].1,
                "stop {} (L {}) is not lighter than stop {} (L {})",
                pair[0].0,
                pair[0].1,
                pair[1].0,
                pair[1].1
            );
        }
    }

    // ── build_scale ─────────────────────────────────────────────

    #[test]
    fn basic_scale_brackets_base() {
        let s = build_scale("#3b82f6");
        assert!(lightness(&s.light) > lightness(&s.base));
        assert!(lightness(&s.base) > lightness(&s.dark));
    }

    #[test]
    fn basic_light_is_capped() {
        let s = build_scale("#f8fafc");
        assert!(lightness(&s.light) <= 0.951);
    }

    #[test]
    fn basic_scale_falls_back_on_garbage() {
        assert_eq!(build_scale("bogus"), builtin::fallback_basic_scale());
    }

    // ── build_extended_scale ────────────────────────────────────

    #[test]
    fn extended_has_all_stops_in_order() {
        let s = build_extended_scale("#10b981");
        assert_eq!(s.keys().collect::<Vec<_>>(), EXTENDED_STOPS.to_vec());
        assert_eq!(s.len(), 8);
    }

    #[test]
    fn extended_600_is_clamped_seed() {
        let s = build_extended_scale("#3b82f6");
        let seed = clamp_oklch(hex_to_oklch("#3b82f6"), ClampContext::Ui, true);
        assert_eq!(&s[600], seed.hex.as_str());
    }

    #[test]
    fn extended_is_strictly_decreasing_at_extremes() {
        for seed in ["#000000", "#ffffff", "#ff0000", "#00ff00", "#f5f5f4", "#3b82f6"] {
            assert_strictly_darker(&build_extended_scale(seed));
        }
    }

    #[test]
    fn extended_stops_stay_in_absolute_band() {
        let s = build_extended_scale("#ffffff");
        for (_, hex) in s.iter() {
            assert!(lightness(hex) <= 0.995, "{hex}");
        }
    }

    #[test]
    fn extended_falls_back_on_garbage() {
        let s = build_extended_scale("#12345");
        assert_eq!(s, builtin::fallback_extended_scale());
        assert_strictly_darker(&s);
    }

    #[test]
    fn stop_lookup_misses_unknown_key() {
        let s = build_extended_scale("#3b82f6");
        assert!(s.stop(500).is_none());
        assert!(s.stop(950).is_some());
    }

    #[test]
    fn scale_serializes_as_keyed_object() {
        let s = build_extended_scale("#3b82f6");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["600"], serde_json::Value::String(s[600].to_string()));
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    // ── build_neutral_scale ─────────────────────────────────────

    #[test]
    fn neutral_is_low_chroma_and_ordered() {
        let s = build_neutral_scale(Some("#3b82f6"));
        assert_eq!(s.keys().collect::<Vec<_>>(), NEUTRAL_STOPS.to_vec());
        for (_, hex) in s.iter() {
            assert!(hex_to_oklch(hex).c < 0.03, "{hex}");
        }
        assert_strictly_darker(&s);
    }

    #[test]
    fn neutral_without_reference_uses_warm_default() {
        assert_eq!(build_neutral_scale(None), neutral_scale_for_hue(NEUTRAL_DEFAULT_HUE));
    }

    #[test]
    fn neutral_follows_reference_hue() {
        let blue = build_neutral_scale(Some("#3b82f6"));
        let warm = build_neutral_scale(None);
        assert_ne!(blue[700], warm[700]);
    }

    #[test]
    fn neutral_falls_back_on_garbage() {
        assert_eq!(build_neutral_scale(Some("nope")), builtin::fallback_neutral_scale());
    }

    // ── build_interaction_states ────────────────────────────────

    #[test]
    fn hover_and_active_are_darker() {
        let st = build_interaction_states("#3b82f6");
        assert!(lightness(&st.hover) < lightness(&st.base));
        assert!(lightness(&st.active) < lightness(&st.hover));
    }

    #[test]
    fn focus_matches_base() {
        let st = build_interaction_states("#10b981");
        assert_eq!(st.focus, st.base);
    }

    #[test]
    fn disabled_is_desaturated() {
        let st = build_interaction_states("#ef4444");
        assert!(hex_to_oklch(&st.disabled).c < hex_to_oklch(&st.base).c * 0.5);
    }

    #[test]
    fn states_base_uses_button_band() {
        let st = build_interaction_states("#000000");
        let l = lightness(&st.base);
        assert!((l - 0.40).abs() < 0.01, "{l}");
    }

    #[test]
    fn states_fall_back_on_garbage() {
        assert_eq!(build_interaction_states(""), builtin::fallback_interaction_states());
    }

    // ── gradient_brand ──────────────────────────────────────────

    #[test]
    fn gradient_css_shape() {
        let g = gradient_brand("#3b82f6", "#10b981", 135.0);
        let p = build_scale("#3b82f6");
        let s = build_scale("#10b981");
        assert_eq!(
            g.css,
            format!("linear-gradient(135deg, {} 0%, {} 50%, {} 100%)", p.base, p.light, s.dark)
        );
        assert_eq!(g.stops.map(|s| s.position), [0, 50, 100]);
    }

    #[test]
    fn gradient_angle_is_configurable() {
        let g = gradient_brand("#3b82f6", "#10b981", 90.0);
        assert!(g.css.starts_with("linear-gradient(90deg,"));
    }
}
