// SPDX-License-Identifier: MIT
//! Safe-range clamping and seed-pair validation.
//!
//! Seed colors arrive from users and can be anything: neon, near-black,
//! washed out. Each usage context has a band of OKLCH lightness and a chroma
//! ceiling that keeps derived shades usable. Clamping records every change
//! as a human-readable audit entry; the entries never drive control flow.
//!
//! A primary/secondary pair is "distinct enough" when *any* of the three
//! metrics passes its threshold (perceptual ΔE, hue angle, lightness).

use std::fmt;

use serde::Serialize;
use tinto_color::{Color, delta_e, hex_to_oklch, hue_difference, lightness_difference, oklch_to_hex};
use tinto_color::color::normalize_hue;

// ---------------------------------------------------------------------------
// Contexts
// ---------------------------------------------------------------------------

/// Where a color will be used. Each context has fixed limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampContext {
    /// General UI surfaces and accents.
    #[default]
    Ui,
    /// Filled button backgrounds.
    Button,
    /// Colored text.
    Text,
}

/// Lightness band and chroma ceiling for a [`ClampContext`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampLimits {
    pub l_min: f32,
    pub l_max: f32,
    pub c_max: f32,
}

impl ClampContext {
    #[must_use]
    pub const fn limits(self) -> ClampLimits {
        match self {
            Self::Ui => ClampLimits { l_min: 0.38, l_max: 0.82, c_max: 0.15 },
            Self::Button => ClampLimits { l_min: 0.40, l_max: 0.80, c_max: 0.15 },
            Self::Text => ClampLimits { l_min: 0.38, l_max: 0.82, c_max: 0.12 },
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Button => "button",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ClampContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The absolute band used when context limits are not forced.
const ABSOLUTE: ClampLimits = ClampLimits { l_min: 0.0, l_max: 1.0, c_max: f32::INFINITY };

// ---------------------------------------------------------------------------
// clamp_oklch
// ---------------------------------------------------------------------------

/// Output of clamping one color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClampResult {
    pub color: Color,
    pub hex: String,
    pub was_adjusted: bool,
    /// Audit trail, one entry per changed field.
    pub adjustments: Vec<String>,
}

/// Clamp a color into the limits of `context`.
///
/// The context band (`l_min..=l_max`, `c <= c_max`) is guaranteed only when
/// `force_limits` is true. With `force_limits = false` the context is
/// ignored and only the absolute range applies (`l ∈ [0, 1]`, `c >= 0`), so
/// the result may sit outside the band. Hue is always normalized into
/// `[0, 360)`.
/// Non-finite components are replaced by the nearest limit.
#[must_use]
pub fn clamp_oklch(color: Color, context: ClampContext, force_limits: bool) -> ClampResult {
    let (limits, band) = if force_limits {
        (context.limits(), context.name())
    } else {
        (ABSOLUTE, "absolute")
    };
    let mut adjustments = Vec::new();

    let l = if color.l.is_nan() {
        adjustments.push(format!("lightness was not a number, set to {:.3}", limits.l_min));
        limits.l_min
    } else if color.l < limits.l_min {
        adjustments.push(format!(
            "lightness raised from {:.3} to {:.3} ({band} minimum)",
            color.l, limits.l_min
        ));
        limits.l_min
    } else if color.l > limits.l_max {
        adjustments.push(format!(
            "lightness lowered from {:.3} to {:.3} ({band} maximum)",
            color.l, limits.l_max
        ));
        limits.l_max
    } else {
        color.l
    };

    let c = if color.c.is_nan() || color.c < 0.0 {
        adjustments.push(format!("chroma {:.3} replaced with 0.000", color.c));
        0.0
    } else if color.c > limits.c_max {
        adjustments.push(format!(
            "chroma reduced from {:.3} to {:.3} ({band} maximum)",
            color.c, limits.c_max
        ));
        limits.c_max
    } else {
        color.c
    };

    let h = if color.h.is_finite() {
        let normalized = normalize_hue(color.h);
        if (normalized - color.h).abs() > f32::EPSILON {
            adjustments.push(format!("hue normalized from {:.1}° to {normalized:.1}°", color.h));
        }
        normalized
    } else {
        adjustments.push(format!("hue {} replaced with 0.0°", color.h));
        0.0
    };

    let clamped = Color::oklcha(l, c, h, color.alpha);
    ClampResult {
        color: clamped,
        hex: oklch_to_hex(clamped),
        was_adjusted: !adjustments.is_empty(),
        adjustments,
    }
}

/// Parse a hex string and clamp it with forced context limits.
#[must_use]
pub fn clamp_hex(hex: &str, context: ClampContext) -> ClampResult {
    clamp_oklch(hex_to_oklch(hex), context, true)
}

// ---------------------------------------------------------------------------
// ensure_difference
// ---------------------------------------------------------------------------

/// Minimum perceptual ΔE for a pair to count as distinct.
pub const MIN_DELTA_E: f32 = 12.0;
/// Minimum hue angle, in degrees.
pub const MIN_HUE_DIFFERENCE: f32 = 25.0;
/// Minimum OKLCH lightness difference.
pub const MIN_LIGHTNESS_DIFFERENCE: f32 = 0.12;

const REMEDIATION_HINT: &str = "Rotate the secondary hue by ±30°, shift its lightness by ±15%, \
                                or pick more contrasting colors";

/// How far apart two colors are, and whether that is enough.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferenceReport {
    pub is_valid: bool,
    pub delta_e: f32,
    pub hue_difference: f32,
    pub lightness_difference: f32,
    pub suggestions: Vec<String>,
}

/// Decide whether a primary/secondary pair is distinguishable.
///
/// Passing any one threshold is enough. Failing pairs get one suggestion
/// per missed threshold plus a generic remediation hint.
#[must_use]
pub fn ensure_difference(primary_hex: &str, secondary_hex: &str) -> DifferenceReport {
    let delta_e = delta_e(primary_hex, secondary_hex);
    let hue_difference = hue_difference(primary_hex, secondary_hex);
    let lightness_difference = lightness_difference(primary_hex, secondary_hex);

    let is_valid = delta_e >= MIN_DELTA_E
        || hue_difference >= MIN_HUE_DIFFERENCE
        || lightness_difference >= MIN_LIGHTNESS_DIFFERENCE;

    let mut suggestions = Vec::new();
    if !is_valid {
        suggestions.push(format!(
            "Perceptual difference ΔE {delta_e:.1} is below {MIN_DELTA_E}"
        ));
        suggestions.push(format!(
            "Hue difference {hue_difference:.1}° is below {MIN_HUE_DIFFERENCE}°"
        ));
        suggestions.push(format!(
            "Lightness difference {lightness_difference:.3} is below {MIN_LIGHTNESS_DIFFERENCE}"
        ));
        suggestions.push(REMEDIATION_HINT.to_string());
    }

    DifferenceReport {
        is_valid,
        delta_e,
        hue_difference,
        lightness_difference,
        suggestions,
    }
}

// ---------------------------------------------------------------------------
// validate_color_pair
// ---------------------------------------------------------------------------

/// One-step fix proposed for a pair that is too similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoFix {
    HarmonizeComplementary,
    AdjustLightness,
    IncreaseChroma,
}

impl AutoFix {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HarmonizeComplementary => "harmonize-complementary",
            Self::AdjustLightness => "adjust-lightness",
            Self::IncreaseChroma => "increase-chroma",
        }
    }
}

impl fmt::Display for AutoFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both seeds clamped, plus the verdict on their distinctness.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairValidation {
    pub primary: ClampResult,
    pub secondary: ClampResult,
    pub difference: DifferenceReport,
    pub is_valid_pair: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fix_suggestion: Option<AutoFix>,
}

/// Clamp both seeds (ui context) and judge the clamped pair.
#[must_use]
pub fn validate_color_pair(primary_hex: &str, secondary_hex: &str) -> PairValidation {
    let primary = clamp_hex(primary_hex, ClampContext::Ui);
    let secondary = clamp_hex(secondary_hex, ClampContext::Ui);
    let difference = ensure_difference(&primary.hex, &secondary.hex);
    let is_valid_pair = difference.is_valid;

    let auto_fix_suggestion = (!is_valid_pair).then(|| pick_auto_fix(&difference));
    if let Some(fix) = auto_fix_suggestion {
        tracing::debug!(
            primary = %primary.hex,
            secondary = %secondary.hex,
            delta_e = difference.delta_e,
            %fix,
            "seed pair too similar"
        );
    }

    PairValidation {
        primary,
        secondary,
        difference,
        is_valid_pair,
        auto_fix_suggestion,
    }
}

/// The threshold with the largest normalized deficit wins; ties go to hue,
/// then lightness, then chroma.
fn pick_auto_fix(diff: &DifferenceReport) -> AutoFix {
    let deficit = |value: f32, threshold: f32| (1.0 - value / threshold).max(0.0);
    let hue = deficit(diff.hue_difference, MIN_HUE_DIFFERENCE);
    let lightness = deficit(diff.lightness_difference, MIN_LIGHTNESS_DIFFERENCE);
    let chroma = deficit(diff.delta_e, MIN_DELTA_E);

    if hue >= lightness && hue >= chroma {
        AutoFix::HarmonizeComplementary
    } else if lightness >= chroma {
        AutoFix::AdjustLightness
    } else {
        AutoFix::IncreaseChroma
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
