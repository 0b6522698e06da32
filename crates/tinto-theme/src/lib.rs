// SPDX-License-Identifier: MIT
//! # tinto-theme — seed-color theme token engine
//!
//! Turns two seed colors (primary, secondary) into a complete UI color
//! system: brand and neutral scales, interaction states, and text/background
//! pairs that meet WCAG contrast, emitted as a token tree, a CSS
//! custom-property block and JSON.
//!
//! # Architecture
//!
//! ```text
//! ThemeInput + ThemeOptions
//!     │
//!     ▼
//! clamp.rs / harmony.rs: safe ranges, pair distinctness, hue harmony
//!     │
//!     ▼
//! scale.rs:    extended, neutral and basic scales, interaction states
//!     │
//!     ▼
//! contrast.rs: WCAG ratios, text color choice, background step search
//!     │
//!     ▼
//! assemble.rs: ThemeTokens + CSS + validation report + metadata
//! ```
//!
//! # Color Space
//!
//! All derivation happens in OKLCH (see `tinto-color`). Colors cross into
//! sRGB only as `#rrggbb` strings, and every contrast decision is measured
//! on the hex that is actually emitted.
//!
//! Nothing here panics on bad input: malformed seeds and internal failures
//! become warnings, the builtin fallback theme, or both.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Step counters become lightness offsets.
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Token tables are long by nature.
#![allow(clippy::too_many_lines)]

pub mod assemble;
pub mod builtin;
pub mod clamp;
pub mod contrast;
pub mod css;
pub mod error;
pub mod harmony;
pub mod options;
pub mod registry;
pub mod scale;
pub mod tokens;

pub use assemble::{
    BuildThemeResult, Metadata, ThemeInput, Validation, build_theme_tokens,
    build_theme_tokens_with, fallback_result,
};
pub use clamp::{
    AutoFix, ClampContext, ClampResult, DifferenceReport, PairValidation, clamp_hex, clamp_oklch,
    ensure_difference, validate_color_pair,
};
pub use contrast::{
    AccessibleText, BackgroundAdjustment, ContrastResult, TextSize, WcagLevel, accessible_text,
    adjust_background_for_contrast, calculate_contrast, component_text_colors, ensure_aa,
};
pub use css::render_css;
pub use error::ThemeError;
pub use harmony::{HarmonyStrategy, harmonize_secondary, harmonize_secondary_seeded};
pub use options::ThemeOptions;
pub use registry::StyleRegistry;
pub use scale::{
    BasicScale, ColorScale, ExtendedScale, Gradient, InteractionStates, NeutralScale, build_scale,
    build_extended_scale, build_interaction_states, build_neutral_scale, gradient_brand,
};
pub use tokens::ThemeTokens;
