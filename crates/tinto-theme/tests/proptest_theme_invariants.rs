// SPDX-License-Identifier: MIT
//! Property-based invariant tests for the theme pipeline.
//!
//! 1. Forced clamping always lands inside the context limits.
//! 2. Extended scales are strictly darker from `25` to `950`.
//! 3. Text chosen for a background meets the target or is the best of
//!    near-black and white.
//! 4. Button text meets AA or is the best available.
//! 5. Token tree and CSS are identical across repeated builds.
//! 6. Every build yields well-formed color tokens.
//! 7. Arbitrary seed strings never panic; malformed ones fall back.

use proptest::prelude::*;
use tinto_color::{Color, hex_to_oklch, normalize_hex};
use tinto_theme::builtin::{FALLBACK_WARNING, fallback_tokens};
use tinto_theme::contrast::{INK, PAPER, hex_contrast, target_ratio};
use tinto_theme::{
    ClampContext, TextSize, ThemeInput, WcagLevel, accessible_text, build_extended_scale,
    build_theme_tokens, clamp_oklch,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn hex_strategy() -> impl Strategy<Value = String> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
}

fn context_strategy() -> impl Strategy<Value = ClampContext> {
    prop_oneof![
        Just(ClampContext::Ui),
        Just(ClampContext::Button),
        Just(ClampContext::Text),
    ]
}

fn level_strategy() -> impl Strategy<Value = (WcagLevel, TextSize)> {
    prop_oneof![
        Just((WcagLevel::Aa, TextSize::Normal)),
        Just((WcagLevel::Aa, TextSize::Large)),
        Just((WcagLevel::Aaa, TextSize::Normal)),
        Just((WcagLevel::Aaa, TextSize::Large)),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Clamp bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn forced_clamp_respects_limits(
        l in -1.0f32..2.0,
        c in -0.5f32..1.0,
        h in -1000.0f32..1000.0,
        context in context_strategy(),
    ) {
        let limits = context.limits();
        let result = clamp_oklch(Color::oklch(l, c, h), context, true);
        prop_assert!(result.color.l >= limits.l_min && result.color.l <= limits.l_max);
        prop_assert!(result.color.c >= 0.0 && result.color.c <= limits.c_max);
        prop_assert!((0.0..360.0).contains(&result.color.h), "hue {}", result.color.h);
        prop_assert_eq!(result.was_adjusted, !result.adjustments.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Monotonic extended scale
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extended_scale_strictly_darker(hex in hex_strategy()) {
        let scale = build_extended_scale(&hex);
        let ls: Vec<f32> = scale.iter().map(|(_, stop)| hex_to_oklch(stop).l).collect();
        for (i, pair) in ls.windows(2).enumerate() {
            prop_assert!(pair[0] > pair[1], "seed {}: stop #{} L {} <= next L {}", hex, i, pair[0], pair[1]);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. accessible_text meets the target or is the best candidate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn accessible_text_is_target_or_best(bg in hex_strategy(), (level, size) in level_strategy()) {
        let target = target_ratio(level, size);
        let text = accessible_text(&bg, level, size);
        prop_assert!(text.color == INK || text.color == PAPER);

        let effective_bg = text.background_adjusted.clone().unwrap_or_else(|| bg.clone());
        let measured = hex_contrast(&text.color, &effective_bg);
        prop_assert!((measured - text.contrast).abs() < 1e-9);

        if text.contrast < target {
            prop_assert!(text.background_adjusted.is_none());
            let best = hex_contrast(INK, &bg).max(hex_contrast(PAPER, &bg));
            prop_assert!((text.contrast - best).abs() < 1e-9);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–6. Whole-theme properties
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn button_text_meets_aa_or_is_best(p in hex_strategy(), s in hex_strategy()) {
        let result = build_theme_tokens(&ThemeInput::new(&p, &s));
        for button in [&result.tokens.button.primary, &result.tokens.button.secondary] {
            let ratio = hex_contrast(&button.text, &button.bg);
            if ratio < 4.5 {
                let other = if button.text == INK { PAPER } else { INK };
                prop_assert!(ratio >= hex_contrast(other, &button.bg));
            }
        }
    }

    #[test]
    fn builds_are_repeatable(p in hex_strategy(), s in hex_strategy()) {
        let input = ThemeInput::new(&p, &s);
        let a = build_theme_tokens(&input);
        let b = build_theme_tokens(&input);
        prop_assert_eq!(a.tokens, b.tokens);
        prop_assert_eq!(a.css, b.css);
    }

    #[test]
    fn every_build_has_well_formed_tokens(p in hex_strategy(), s in hex_strategy()) {
        let result = build_theme_tokens(&ThemeInput::new(&p, &s));
        prop_assert!(result.tokens.validate().is_ok());
        prop_assert_ne!(&result.validation.warnings, &vec![FALLBACK_WARNING.to_string()]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Fail-soft on arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_seed_never_panics(p in "\\PC{0,10}", s in hex_strategy()) {
        let result = build_theme_tokens(&ThemeInput::new(&p, &s));
        if normalize_hex(&p).is_err() {
            prop_assert!(!result.validation.is_valid);
            prop_assert_eq!(result.tokens, fallback_tokens(135.0));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn blue_emerald_scenario() {
    let result = build_theme_tokens(&ThemeInput::new("#3b82f6", "#10b981"));
    assert!(result.validation.is_valid);

    let p600 = hex_to_oklch(&result.tokens.primary[600]);
    let seed = hex_to_oklch("#3b82f6");
    assert!((p600.l - seed.l).abs() < 0.01 && (p600.h - seed.h).abs() < 2.0);

    let btn = &result.tokens.button.primary;
    assert!(btn.text == "#ffffff" || btn.text == "#111111");
    assert!(hex_contrast(&btn.text, &btn.bg) >= 4.5);
}

#[test]
fn not_a_color_scenario() {
    let result = build_theme_tokens(&ThemeInput::new("not-a-color", "#123456"));
    assert!(!result.validation.is_valid);
    assert!(result.tokens.validate().is_ok());
    assert!(result.css.contains("--btn-primary-bg:"));
}
