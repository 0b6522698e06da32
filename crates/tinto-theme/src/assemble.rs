// SPDX-License-Identifier: MIT
//! Theme assembly: two seed colors in, a complete token set out.
//!
//! ```text
//! ThemeInput { primary_hex, secondary_hex }
//!     │
//!     ▼
//! clamp.rs:    clamp both seeds, judge the pair (warnings only)
//!     │
//!     ▼
//! scale.rs:    extended + neutral scales, interaction states
//!     │
//!     ▼
//! contrast.rs: text colors for buttons, badges, chip, sidebar
//!     │
//!     ▼
//! tokens.rs / css.rs: token tree, CSS block, metadata
//! ```
//!
//! [`build_theme_tokens`] never fails. Malformed seeds or any internal
//! error produce the hard-coded fallback theme with `is_valid = false`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tinto_color::{Color, hex_to_oklch, oklch_to_hex, try_hex_to_oklch};

use crate::builtin::{self, FALLBACK_PRIMARY, FALLBACK_SECONDARY, FALLBACK_WARNING};
use crate::clamp::{PairValidation, validate_color_pair};
use crate::contrast::{
    AccessibleText, accessible_text, component_text_colors, ensure_readability, target_ratio,
};
use crate::css::render_css;
use crate::error::ThemeError;
use crate::options::ThemeOptions;
use crate::scale::{
    ExtendedScale, InteractionStates, build_neutral_scale, gradient_brand,
    try_build_extended_scale, try_build_interaction_states,
};
use crate::tokens::{
    BadgeSet, BadgeTokens, ButtonSet, ButtonTokens, ChipTokens, GradientTokens, SidebarTokens,
    SurfaceTokens, TextTokens, ThemeTokens,
};

/// Fixed semantic badge colors.
const BADGE_SUCCESS: &str = "#16a34a";
const BADGE_WARNING: &str = "#f59e0b";
const BADGE_DANGER: &str = "#ef4444";
const BADGE_INFO: &str = "#0ea5e9";

/// Alpha of the chip drop shadow.
const CHIP_SHADOW_ALPHA: f32 = 0.16;

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

/// A theme build request.
///
/// JSON uses `primaryHex` / `secondaryHex`; `primary`, `secondary` and the
/// snake_case names are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeInput {
    #[serde(alias = "primary", alias = "primary_hex")]
    pub primary_hex: String,
    #[serde(alias = "secondary", alias = "secondary_hex")]
    pub secondary_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ThemeInput {
    #[must_use]
    pub fn new(primary_hex: impl Into<String>, secondary_hex: impl Into<String>) -> Self {
        Self {
            primary_hex: primary_hex.into(),
            secondary_hex: secondary_hex.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// What was changed and what looks wrong. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    /// False when the seeds are too similar or the fallback theme was used.
    pub is_valid: bool,
    pub adjustments: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub primary_original: String,
    pub secondary_original: String,
    pub primary_final: String,
    pub secondary_final: String,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
}

/// Everything a theme build produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildThemeResult {
    pub tokens: ThemeTokens,
    pub css: String,
    pub validation: Validation,
    pub metadata: Metadata,
}

impl BuildThemeResult {
    /// Pretty-printed JSON of the whole result.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Build a theme with default options.
#[must_use]
pub fn build_theme_tokens(input: &ThemeInput) -> BuildThemeResult {
    build_theme_tokens_with(input, &ThemeOptions::default())
}

/// Build a theme. Never fails; see the module docs.
#[must_use]
pub fn build_theme_tokens_with(input: &ThemeInput, options: &ThemeOptions) -> BuildThemeResult {
    match try_build(input, options) {
        Ok(result) => {
            tracing::debug!(
                primary = %result.metadata.primary_final,
                secondary = %result.metadata.secondary_final,
                is_valid = result.validation.is_valid,
                warnings = result.validation.warnings.len(),
                "built theme"
            );
            result
        }
        Err(err) => {
            tracing::warn!(
                primary = %input.primary_hex,
                secondary = %input.secondary_hex,
                error = %err,
                "theme build failed, using fallback"
            );
            fallback_result(input, options)
        }
    }
}

/// The complete hard-coded result for `input`.
#[must_use]
pub fn fallback_result(input: &ThemeInput, options: &ThemeOptions) -> BuildThemeResult {
    let tokens = builtin::fallback_tokens(options.gradient_angle);
    BuildThemeResult {
        css: render_css(&tokens, &options.selector),
        tokens,
        validation: Validation {
            is_valid: false,
            adjustments: Vec::new(),
            warnings: vec![FALLBACK_WARNING.to_string()],
        },
        metadata: Metadata {
            name: input.name.clone(),
            primary_original: input.primary_hex.clone(),
            secondary_original: input.secondary_hex.clone(),
            primary_final: FALLBACK_PRIMARY.to_string(),
            secondary_final: FALLBACK_SECONDARY.to_string(),
            generated_at: timestamp(),
        },
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

fn try_build(input: &ThemeInput, options: &ThemeOptions) -> Result<BuildThemeResult, ThemeError> {
    // Malformed seeds must not silently become black.
    try_hex_to_oklch(&input.primary_hex)?;
    try_hex_to_oklch(&input.secondary_hex)?;

    let pair = validate_color_pair(&input.primary_hex, &input.secondary_hex);
    let mut validation = Validation {
        is_valid: pair.is_valid_pair,
        adjustments: pair_adjustments(&pair),
        warnings: pair_warnings(&pair),
    };

    let primary = try_build_extended_scale(&pair.primary.hex)?;
    let secondary = try_build_extended_scale(&pair.secondary.hex)?;
    let neutral = build_neutral_scale(Some(&pair.primary.hex));

    let primary_states = try_build_interaction_states(stop(&primary, "primary", 600)?)?;
    let secondary_states = try_build_interaction_states(stop(&secondary, "secondary", 600)?)?;

    let button = ButtonSet {
        primary: button_tokens("btn-primary", primary_states, options, &mut validation),
        secondary: button_tokens("btn-secondary", secondary_states, options, &mut validation),
    };

    let badge = BadgeSet {
        success: badge_tokens("badge-success", BADGE_SUCCESS, options, &mut validation),
        warning: badge_tokens("badge-warning", BADGE_WARNING, options, &mut validation),
        danger: badge_tokens("badge-danger", BADGE_DANGER, options, &mut validation),
        info: badge_tokens("badge-info", BADGE_INFO, options, &mut validation),
    };

    let surface = SurfaceTokens {
        s0: stop(&neutral, "neutral", 0)?.to_string(),
        s1: stop(&neutral, "neutral", 50)?.to_string(),
        s2: stop(&neutral, "neutral", 100)?.to_string(),
        s3: stop(&neutral, "neutral", 200)?.to_string(),
    };

    // Muted text sits closest to the surface; pull it darker if needed.
    let body_target = target_ratio(options.level, options.text_size);
    let muted = ensure_readability(
        hex_to_oklch(stop(&neutral, "neutral", 700)?),
        hex_to_oklch(&surface.s0),
        body_target,
        false,
    );
    let text = TextTokens {
        strong: stop(&neutral, "neutral", 950)?.to_string(),
        body: stop(&neutral, "neutral", 900)?.to_string(),
        muted: oklch_to_hex(muted),
        inverse: stop(&neutral, "neutral", 0)?.to_string(),
    };

    let sidebar_bg = stop(&primary, "primary", 950)?.to_string();
    let sidebar = SidebarTokens {
        item_color: component_text_colors(&sidebar_bg).secondary,
        item_active_bg: stop(&primary, "primary", 900)?.to_string(),
        item_active_indicator: stop(&secondary, "secondary", 300)?.to_string(),
        bg: sidebar_bg,
    };

    let chip_bg = stop(&primary, "primary", 50)?.to_string();
    let chip = ChipTokens {
        text: accessible_text(&chip_bg, options.level, options.text_size).color,
        shadow: shadow(stop(&primary, "primary", 700)?)?,
        bg: chip_bg,
    };

    let gradient = GradientTokens {
        brand: gradient_brand(&pair.primary.hex, &pair.secondary.hex, options.gradient_angle),
    };

    let tokens = ThemeTokens {
        primary,
        secondary,
        neutral,
        text,
        surface,
        button,
        badge,
        sidebar,
        chip,
        gradient,
    };
    tokens.validate()?;

    Ok(BuildThemeResult {
        css: render_css(&tokens, &options.selector),
        tokens,
        validation,
        metadata: Metadata {
            name: input.name.clone(),
            primary_original: input.primary_hex.clone(),
            secondary_original: input.secondary_hex.clone(),
            primary_final: pair.primary.hex,
            secondary_final: pair.secondary.hex,
            generated_at: timestamp(),
        },
    })
}

fn stop<'a>(scale: &'a ExtendedScale, name: &str, key: u16) -> Result<&'a str, ThemeError> {
    scale.stop(key).ok_or_else(|| ThemeError::InvalidToken {
        name: format!("{name}-{key}"),
        value: String::new(),
    })
}

fn pair_adjustments(pair: &PairValidation) -> Vec<String> {
    let primary = pair.primary.adjustments.iter().map(|a| format!("primary: {a}"));
    let secondary = pair.secondary.adjustments.iter().map(|a| format!("secondary: {a}"));
    primary.chain(secondary).collect()
}

fn pair_warnings(pair: &PairValidation) -> Vec<String> {
    if pair.is_valid_pair {
        return Vec::new();
    }
    let d = &pair.difference;
    let mut warnings = vec![format!(
        "Primary and secondary colors are too similar (ΔE {:.1}, hue {:.1}°, lightness {:.2})",
        d.delta_e, d.hue_difference, d.lightness_difference
    )];
    warnings.extend(d.suggestions.iter().cloned());
    if let Some(fix) = pair.auto_fix_suggestion {
        warnings.push(format!("Suggested fix: {fix}"));
    }
    warnings
}

/// Text color for `bg`, recording any background change or shortfall.
fn text_on(
    token: &str,
    bg: &str,
    options: &ThemeOptions,
    validation: &mut Validation,
) -> AccessibleText {
    let text = accessible_text(bg, options.level, options.text_size);
    if let Some(adjusted) = &text.background_adjusted {
        validation
            .adjustments
            .push(format!("{token}-bg: {bg} adjusted to {adjusted} for contrast"));
    }
    let target = target_ratio(options.level, options.text_size);
    if text.contrast < target {
        validation.warnings.push(format!(
            "{token}-text: best contrast {:.2}:1 is below {target:.1}:1",
            text.contrast
        ));
    }
    text
}

fn button_tokens(
    token: &str,
    states: InteractionStates,
    options: &ThemeOptions,
    validation: &mut Validation,
) -> ButtonTokens {
    let text = text_on(token, &states.base, options, validation);
    ButtonTokens {
        bg: text.background_adjusted.unwrap_or(states.base),
        text: text.color,
        hover: states.hover,
        active: states.active,
        focus: states.focus,
    }
}

fn badge_tokens(
    token: &str,
    bg: &str,
    options: &ThemeOptions,
    validation: &mut Validation,
) -> BadgeTokens {
    let text = text_on(token, bg, options, validation);
    BadgeTokens {
        bg: text.background_adjusted.unwrap_or_else(|| bg.to_string()),
        text: text.color,
    }
}

/// Soft drop shadow tinted with `hex`.
fn shadow(hex: &str) -> Result<String, ThemeError> {
    let (r, g, b) = Color::hex(hex)?.to_rgb8();
    Ok(format!("0 1px 2px 0 rgba({r}, {g}, {b}, {CHIP_SHADOW_ALPHA})"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
