// SPDX-License-Identifier: MIT
//! WCAG contrast measurement and enforcement.
//!
//! Thresholds (WCAG 2.x):
//!
//! - AA: 4.5:1 normal text, 3.0:1 large text
//! - AAA: 7.0:1 normal text, 4.5:1 large text
//!
//! Readability is measured in sRGB relative luminance (the WCAG definition)
//! but adjustments move OKLCH lightness, because OKLCH steps are
//! perceptually even. Every ratio that feeds a decision is measured on the
//! 8-bit hex color that will actually be emitted, so a later
//! [`calculate_contrast`] on the emitted tokens reproduces the same number.
//!
//! Contrast targets are best-effort: when nothing reaches the target the
//! best candidate seen is returned, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};
use tinto_color::color::srgb_to_linear;
use tinto_color::{Color, hex_to_oklch, oklch_to_hex};

/// Near-black text candidate.
pub const INK: &str = "#111111";
/// White text candidate.
pub const PAPER: &str = "#ffffff";

/// Lightness step of the background search.
const BACKGROUND_STEP: f32 = 0.02;
/// Bisection rounds for [`ensure_readability`].
const READABILITY_ROUNDS: u32 = 32;
/// Default number of steps tried in each direction.
pub const DEFAULT_MAX_STEPS: u32 = 6;

// ---------------------------------------------------------------------------
// Levels and targets
// ---------------------------------------------------------------------------

/// Conformance level a caller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA", alias = "aa")]
    Aa,
    #[serde(rename = "AAA", alias = "aaa")]
    Aaa,
}

/// Text size class. Large is 18pt regular or 14pt bold and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

/// Minimum contrast ratio for a level and text size.
#[must_use]
pub const fn target_ratio(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::Aa, TextSize::Normal) | (WcagLevel::Aaa, TextSize::Large) => 4.5,
        (WcagLevel::Aa, TextSize::Large) => 3.0,
        (WcagLevel::Aaa, TextSize::Normal) => 7.0,
    }
}

/// Level a measured ratio reaches for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "FAIL")]
    Fail,
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "FAIL",
        })
    }
}

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// Relative luminance of a color per WCAG 2.1, in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    const WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
    let (r, g, b) = color.to_srgb();
    [r, g, b]
        .into_iter()
        .zip(WEIGHTS)
        .fold(0.0, |sum, (channel, weight)| {
            weight.mul_add(f64::from(srgb_to_linear(channel)), sum)
        })
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0], order-free.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (ya, yb) = (relative_luminance(a), relative_luminance(b));
    (ya.max(yb) + 0.05) / (ya.min(yb) + 0.05)
}

/// Contrast ratio between two hex colors.
#[must_use]
pub fn hex_contrast(fg: &str, bg: &str) -> f64 {
    contrast_ratio(hex_to_oklch(fg), hex_to_oklch(bg))
}

// ---------------------------------------------------------------------------
// calculate_contrast / ensure_aa
// ---------------------------------------------------------------------------

/// A measured ratio and what it qualifies for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    pub ratio: f64,
    pub level: ContrastLevel,
    pub is_accessible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Measure `fg` on `bg` and grade it against the normal-text thresholds.
#[must_use]
pub fn calculate_contrast(fg: &str, bg: &str) -> ContrastResult {
    let ratio = hex_contrast(fg, bg);
    let aa = target_ratio(WcagLevel::Aa, TextSize::Normal);
    let aaa = target_ratio(WcagLevel::Aaa, TextSize::Normal);
    let aa_large = target_ratio(WcagLevel::Aa, TextSize::Large);

    let level = if ratio >= aaa {
        ContrastLevel::Aaa
    } else if ratio >= aa {
        ContrastLevel::Aa
    } else {
        ContrastLevel::Fail
    };

    let recommendation = if ratio >= aa {
        None
    } else if ratio >= aa_large {
        Some(format!(
            "{ratio:.2}:1 passes AA only for large text (18pt, or 14pt bold)"
        ))
    } else {
        Some(format!(
            "{ratio:.2}:1 is too low for any text; AA needs {aa:.1}:1 (large text {aa_large:.1}:1)"
        ))
    };

    ContrastResult {
        ratio,
        level,
        is_accessible: ratio >= aa,
        recommendation,
    }
}

/// Pass/fail against AA for the given text size.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AaCheck {
    pub is_valid: bool,
    pub contrast: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[must_use]
pub fn ensure_aa(fg: &str, bg: &str, size: TextSize) -> AaCheck {
    let contrast = hex_contrast(fg, bg);
    let target = target_ratio(WcagLevel::Aa, size);
    let is_valid = contrast >= target;
    let suggestion = (!is_valid).then(|| {
        format!(
            "Contrast {contrast:.2}:1 is below the {target:.1}:1 AA minimum for {} text; \
             raise it by {:.2}",
            match size {
                TextSize::Normal => "normal",
                TextSize::Large => "large",
            },
            target - contrast
        )
    });
    AaCheck {
        is_valid,
        contrast,
        suggestion,
    }
}

// ---------------------------------------------------------------------------
// Background search
// ---------------------------------------------------------------------------

/// Which way the background moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Darker,
    Lighter,
    None,
}

/// Outcome of [`adjust_background_for_contrast`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAdjustment {
    /// Replacement background, if any step beat the original.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_adjusted: Option<String>,
    pub final_contrast: f64,
    pub steps: u32,
    pub direction: Direction,
    pub reached_target: bool,
}

/// Step the background's OKLCH lightness until `foreground` reaches the
/// target ratio.
///
/// Darkening (`-0.02` per step) is tried first for up to `max_steps`
/// steps, then lightening. The first step that reaches the target wins.
/// Otherwise the best ratio seen is reported with its direction; when no
/// step beats the original background, direction is [`Direction::None`].
#[must_use]
pub fn adjust_background_for_contrast(
    background: &str,
    foreground: &str,
    level: WcagLevel,
    size: TextSize,
    max_steps: u32,
) -> BackgroundAdjustment {
    let bg = hex_to_oklch(background);
    let fg = hex_to_oklch(foreground);
    let target = target_ratio(level, size);

    let mut best = BackgroundAdjustment {
        background_adjusted: None,
        final_contrast: contrast_ratio(fg, bg),
        steps: 0,
        direction: Direction::None,
        reached_target: false,
    };

    for (direction, delta) in [(Direction::Darker, -BACKGROUND_STEP), (Direction::Lighter, BACKGROUND_STEP)] {
        for step in 1..=max_steps {
            let candidate_hex = oklch_to_hex(bg.set_lightness(delta.mul_add(step as f32, bg.l)));
            let ratio = contrast_ratio(fg, hex_to_oklch(&candidate_hex));

            if ratio >= target {
                tracing::debug!(
                    from = background,
                    to = %candidate_hex,
                    ?direction,
                    step,
                    ratio,
                    "background adjusted to reach contrast target"
                );
                return BackgroundAdjustment {
                    background_adjusted: Some(candidate_hex),
                    final_contrast: ratio,
                    steps: step,
                    direction,
                    reached_target: true,
                };
            }

            if ratio > best.final_contrast {
                best = BackgroundAdjustment {
                    background_adjusted: Some(candidate_hex),
                    final_contrast: ratio,
                    steps: step,
                    direction,
                    reached_target: false,
                };
            }
        }
    }

    tracing::debug!(
        background,
        foreground,
        target,
        best = best.final_contrast,
        "contrast target unreachable by background adjustment"
    );
    best
}

// ---------------------------------------------------------------------------
// Text selection
// ---------------------------------------------------------------------------

/// Text color chosen for a background.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibleText {
    pub color: String,
    pub contrast: f64,
    /// Present when the background had to move to reach the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_adjusted: Option<String>,
}

/// Pick near-black or white text for `background`.
///
/// Near-black wins when both pass. When neither passes, the background is
/// stepped toward the better candidate's target; if that also falls short
/// the better of the two is returned against the original background.
#[must_use]
pub fn accessible_text(background: &str, level: WcagLevel, size: TextSize) -> AccessibleText {
    let target = target_ratio(level, size);
    let ink = hex_contrast(INK, background);
    let paper = hex_contrast(PAPER, background);

    if ink >= target {
        return AccessibleText { color: INK.to_string(), contrast: ink, background_adjusted: None };
    }
    if paper >= target {
        return AccessibleText { color: PAPER.to_string(), contrast: paper, background_adjusted: None };
    }

    let (best, best_ratio) = if ink >= paper { (INK, ink) } else { (PAPER, paper) };
    let adjustment = adjust_background_for_contrast(background, best, level, size, DEFAULT_MAX_STEPS);
    if adjustment.reached_target {
        return AccessibleText {
            color: best.to_string(),
            contrast: adjustment.final_contrast,
            background_adjusted: adjustment.background_adjusted,
        };
    }

    tracing::warn!(background, best, ratio = best_ratio, target, "no text color reaches contrast target");
    AccessibleText { color: best.to_string(), contrast: best_ratio, background_adjusted: None }
}

/// Quick text colors for secondary and muted labels on a background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

/// Lightness heuristic, no search: dark text on light backgrounds
/// (OKLCH L > 0.6), white text otherwise.
#[must_use]
pub fn component_text_colors(background: &str) -> ComponentTextColors {
    let base = if hex_to_oklch(background).l > 0.6 {
        Color::rgb8(17, 17, 17)
    } else {
        Color::rgb8(255, 255, 255)
    };
    ComponentTextColors {
        primary: base.to_css(),
        secondary: base.with_alpha(0.75).to_css(),
        muted: base.with_alpha(0.55).to_css(),
    }
}

/// Move a foreground's OKLCH lightness until it reaches `min_ratio` against
/// `bg`, staying as close to the original lightness as possible.
///
/// `lighten` picks the search direction. Binary search, so the result is
/// the nearest passing lightness within float precision; if even the
/// extreme fails, the extreme is returned.
#[must_use]
pub fn ensure_readability(fg: Color, bg: Color, min_ratio: f64, lighten: bool) -> Color {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg.to_gamut();
    }

    let at = |l: f32| fg.set_lightness(l).to_gamut();
    let extreme = if lighten { 1.0 } else { 0.0 };
    // `near` never passes, `far` always does (or is the extreme).
    let (mut near, mut far) = (fg.l, extreme);
    for _ in 0..READABILITY_ROUNDS {
        let mid = (near + far) * 0.5;
        if contrast_ratio(at(mid), bg) >= min_ratio {
            far = mid;
        } else {
            near = mid;
        }
    }
    at(far)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Luminance and ratio ─────────────────────────────────────────

    #[test]
    fn luminance_spans_zero_to_one() {
        assert!(approx_eq(relative_luminance(Color::BLACK), 0.0, 0.001));
        assert!(approx_eq(relative_luminance(Color::WHITE), 1.0, 0.001));
    }

    #[test]
    fn green_carries_most_luminance() {
        let y = relative_luminance(Color::rgb8(0, 255, 0));
        assert!(approx_eq(y, 0.7152, 0.01), "green Y = {y}");
    }

    #[test]
    fn extremes_give_21_to_1() {
        let ratio = hex_contrast("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 0.1), "got {ratio}");
    }

    #[test]
    fn ratio_ignores_argument_order() {
        let ab = hex_contrast("#cc3344", "#1a1a66");
        let ba = hex_contrast("#1a1a66", "#cc3344");
        assert!(approx_eq(ab, ba, 1e-9));
    }

    // ── calculate_contrast ──────────────────────────────────────────

    #[test]
    fn black_on_white_is_aaa() {
        let result = calculate_contrast("#000000", "#ffffff");
        assert_eq!(result.level, ContrastLevel::Aaa);
        assert!(result.is_accessible);
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn mid_gray_on_white_is_large_text_only() {
        // #888888 on white is ~3.5:1.
        let result = calculate_contrast("#888888", "#ffffff");
        assert_eq!(result.level, ContrastLevel::Fail);
        assert!(!result.is_accessible);
        assert!(result.recommendation.unwrap().contains("large text"));
    }

    #[test]
    fn same_color_fails_outright() {
        let result = calculate_contrast("#3b82f6", "#3b82f6");
        assert!(approx_eq(result.ratio, 1.0, 0.01));
        assert!(result.recommendation.unwrap().contains("too low"));
    }

    #[test]
    fn aa_band() {
        // #767676 on white is the classic ~4.54:1 gray.
        let result = calculate_contrast("#767676", "#ffffff");
        assert_eq!(result.level, ContrastLevel::Aa);
    }

    #[test]
    fn targets_match_wcag_table() {
        assert!(approx_eq(target_ratio(WcagLevel::Aa, TextSize::Normal), 4.5, 1e-9));
        assert!(approx_eq(target_ratio(WcagLevel::Aa, TextSize::Large), 3.0, 1e-9));
        assert!(approx_eq(target_ratio(WcagLevel::Aaa, TextSize::Normal), 7.0, 1e-9));
        assert!(approx_eq(target_ratio(WcagLevel::Aaa, TextSize::Large), 4.5, 1e-9));
    }

    // ── ensure_aa ───────────────────────────────────────────────────

    #[test]
    fn ensure_aa_respects_text_size() {
        assert!(!ensure_aa("#888888", "#ffffff", TextSize::Normal).is_valid);
        assert!(ensure_aa("#888888", "#ffffff", TextSize::Large).is_valid);
        let failing = ensure_aa("#cccccc", "#ffffff", TextSize::Normal);
        assert!(failing.suggestion.unwrap().contains("4.5:1"));
    }

    // ── accessible_text ─────────────────────────────────────────────

    #[test]
    fn light_background_gets_ink() {
        let text = accessible_text("#f5f5f4", WcagLevel::Aa, TextSize::Normal);
        assert_eq!(text.color, INK);
        assert!(text.background_adjusted.is_none());
    }

    #[test]
    fn dark_background_gets_white() {
        let text = accessible_text("#1e3a8a", WcagLevel::Aa, TextSize::Normal);
        assert_eq!(text.color, PAPER);
        assert!(text.contrast >= 4.5);
    }

    #[test]
    fn ink_wins_ties() {
        // Both candidates clear the large-text target on this mid gray.
        let bg = "#7a7a7a";
        assert!(hex_contrast(INK, bg) >= 3.0 && hex_contrast(PAPER, bg) >= 3.0);
        let text = accessible_text(bg, WcagLevel::Aa, TextSize::Large);
        assert_eq!(text.color, INK);
    }

    #[test]
    fn mid_tone_background_is_adjusted() {
        // Neither #111111 nor white reaches 4.5:1 on this mid gray.
        let bg = "#7a7a7a";
        assert!(hex_contrast(INK, bg) < 4.5 && hex_contrast(PAPER, bg) < 4.5);
        let text = accessible_text(bg, WcagLevel::Aa, TextSize::Normal);
        let adjusted = text.background_adjusted.expect("background should move");
        assert!(hex_contrast(&text.color, &adjusted) >= 4.5);
        assert!(approx_eq(text.contrast, hex_contrast(&text.color, &adjusted), 1e-9));
    }

    // ── adjust_background_for_contrast ──────────────────────────────

    #[test]
    fn darkening_is_tried_first() {
        let adj = adjust_background_for_contrast("#7a7a7a", PAPER, WcagLevel::Aa, TextSize::Normal, 6);
        assert!(adj.reached_target);
        assert_eq!(adj.direction, Direction::Darker);
        assert!(adj.steps >= 1 && adj.steps <= 6);
    }

    #[test]
    fn lightening_used_when_darkening_cannot_help() {
        let adj = adjust_background_for_contrast("#7a7a7a", INK, WcagLevel::Aa, TextSize::Normal, 6);
        assert!(adj.reached_target);
        assert_eq!(adj.direction, Direction::Lighter);
    }

    #[test]
    fn already_passing_pair_reports_first_step() {
        // The search only runs stepped candidates; darkening white text's
        // background keeps passing, so step one wins.
        let adj = adjust_background_for_contrast("#1e3a8a", PAPER, WcagLevel::Aa, TextSize::Normal, 6);
        assert!(adj.reached_target);
        assert_eq!(adj.steps, 1);
    }

    #[test]
    fn zero_steps_reports_none() {
        let adj = adjust_background_for_contrast("#7a7a7a", PAPER, WcagLevel::Aaa, TextSize::Normal, 0);
        assert!(!adj.reached_target);
        assert_eq!(adj.direction, Direction::None);
        assert!(adj.background_adjusted.is_none());
    }

    #[test]
    fn unreachable_reports_best_attempt() {
        let adj = adjust_background_for_contrast("#737373", "#777777", WcagLevel::Aaa, TextSize::Normal, 6);
        assert!(!adj.reached_target);
        assert!(adj.final_contrast > hex_contrast("#777777", "#737373"));
        assert_ne!(adj.direction, Direction::None);
    }

    // ── component_text_colors ───────────────────────────────────────

    #[test]
    fn component_colors_follow_lightness() {
        let light = component_text_colors("#f5f5f4");
        assert_eq!(light.primary, "#111111");
        assert_eq!(light.secondary, "rgba(17, 17, 17, 0.75)");
        assert_eq!(light.muted, "rgba(17, 17, 17, 0.55)");

        let dark = component_text_colors("#1c1917");
        assert_eq!(dark.primary, "#ffffff");
        assert_eq!(dark.secondary, "rgba(255, 255, 255, 0.75)");
    }

    // ── ensure_readability ──────────────────────────────────────────

    #[test]
    fn pale_text_on_paper_is_darkened() {
        let surface = hex_to_oklch("#fafaf9");
        let pale = Color::oklch(0.80, 0.04, 60.0);
        let fixed = ensure_readability(pale, surface, 4.5, false);
        assert!(contrast_ratio(fixed, surface) >= 4.5);
        assert!(fixed.l < pale.l);
    }

    #[test]
    fn dim_text_on_night_surface_is_lightened() {
        let surface = hex_to_oklch("#0c0a09");
        let dim = Color::oklch(0.30, 0.03, 250.0);
        let fixed = ensure_readability(dim, surface, 7.0, true);
        assert!(contrast_ratio(fixed, surface) >= 7.0);
        assert!(fixed.l > dim.l);
    }

    #[test]
    fn readability_keeps_passing_color() {
        let adjusted = ensure_readability(Color::WHITE, Color::BLACK, 5.5, true);
        assert_eq!(adjusted, Color::WHITE);
    }
}
