// SPDX-License-Identifier: MIT
//! Hard-coded themes: the fail-safe fallback and named seed presets.
//!
//! The fallback is a blue/green theme written out literally, so it can be
//! produced without running any of the color math that might have failed.

use crate::assemble::ThemeInput;
use crate::scale::{BasicScale, ColorScale, ExtendedScale, Gradient, InteractionStates, NeutralScale};
use crate::tokens::{
    BadgeSet, BadgeTokens, ButtonSet, ButtonTokens, ChipTokens, GradientTokens, SidebarTokens,
    SurfaceTokens, TextTokens, ThemeTokens,
};

/// `600` stop of the fallback primary scale.
pub const FALLBACK_PRIMARY: &str = "#2563eb";
/// `600` stop of the fallback secondary scale.
pub const FALLBACK_SECONDARY: &str = "#059669";

/// Warning attached to every fallback result.
pub const FALLBACK_WARNING: &str =
    "Theme generation failed; using the default blue/green theme";

const BLUE: [(u16, &str); 8] = [
    (25, "#f5f9ff"),
    (50, "#eff6ff"),
    (100, "#dbeafe"),
    (300, "#93c5fd"),
    (600, FALLBACK_PRIMARY),
    (700, "#1d4ed8"),
    (900, "#1e3a8a"),
    (950, "#172554"),
];

const EMERALD: [(u16, &str); 8] = [
    (25, "#f3fdf9"),
    (50, "#ecfdf5"),
    (100, "#d1fae5"),
    (300, "#6ee7b7"),
    (600, FALLBACK_SECONDARY),
    (700, "#047857"),
    (900, "#064e3b"),
    (950, "#022c22"),
];

const STONE: [(u16, &str); 8] = [
    (0, "#fdfdfc"),
    (50, "#fafaf9"),
    (100, "#f5f5f4"),
    (200, "#e7e5e4"),
    (300, "#d6d3d1"),
    (700, "#44403c"),
    (900, "#1c1917"),
    (950, "#0c0a09"),
];

// ---------------------------------------------------------------------------
// Fallback pieces
// ---------------------------------------------------------------------------

pub(crate) fn fallback_basic_scale() -> BasicScale {
    BasicScale {
        light: "#60a5fa".into(),
        base: "#3b82f6".into(),
        dark: "#1d4ed8".into(),
    }
}

pub(crate) fn fallback_extended_scale() -> ExtendedScale {
    ColorScale::from_pairs(BLUE)
}

pub(crate) fn fallback_neutral_scale() -> NeutralScale {
    ColorScale::from_pairs(STONE)
}

pub(crate) fn fallback_interaction_states() -> InteractionStates {
    InteractionStates {
        base: FALLBACK_PRIMARY.into(),
        hover: "#1d4ed8".into(),
        active: "#1e40af".into(),
        focus: FALLBACK_PRIMARY.into(),
        disabled: "#94a3b8".into(),
    }
}

fn badge(bg: &str, text: &str) -> BadgeTokens {
    BadgeTokens {
        bg: bg.into(),
        text: text.into(),
    }
}

/// The complete fallback token tree.
///
/// Every text/background pair in it meets AA for normal text.
#[must_use]
pub fn fallback_tokens(gradient_angle: f32) -> ThemeTokens {
    ThemeTokens {
        primary: fallback_extended_scale(),
        secondary: ColorScale::from_pairs(EMERALD),
        neutral: fallback_neutral_scale(),
        text: TextTokens {
            strong: "#0c0a09".into(),
            body: "#1c1917".into(),
            muted: "#44403c".into(),
            inverse: "#fdfdfc".into(),
        },
        surface: SurfaceTokens {
            s0: "#fdfdfc".into(),
            s1: "#fafaf9".into(),
            s2: "#f5f5f4".into(),
            s3: "#e7e5e4".into(),
        },
        button: ButtonSet {
            primary: ButtonTokens {
                bg: FALLBACK_PRIMARY.into(),
                text: "#ffffff".into(),
                hover: "#1d4ed8".into(),
                active: "#1e40af".into(),
                focus: FALLBACK_PRIMARY.into(),
            },
            secondary: ButtonTokens {
                bg: "#047857".into(),
                text: "#ffffff".into(),
                hover: "#065f46".into(),
                active: "#064e3b".into(),
                focus: "#047857".into(),
            },
        },
        badge: BadgeSet {
            success: badge("#16a34a", "#111111"),
            warning: badge("#f59e0b", "#111111"),
            danger: badge("#ef4444", "#111111"),
            info: badge("#0ea5e9", "#111111"),
        },
        sidebar: SidebarTokens {
            bg: "#172554".into(),
            item_color: "rgba(255, 255, 255, 0.75)".into(),
            item_active_bg: "#1e3a8a".into(),
            item_active_indicator: "#6ee7b7".into(),
        },
        chip: ChipTokens {
            bg: "#eff6ff".into(),
            text: "#111111".into(),
            shadow: "0 1px 2px 0 rgba(29, 78, 216, 0.16)".into(),
        },
        gradient: GradientTokens {
            brand: Gradient::linear(gradient_angle, ["#3b82f6", "#60a5fa", "#047857"]),
        },
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// A named seed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

const PRESETS: &[Preset] = &[
    Preset { name: "default", primary: "#3b82f6", secondary: "#10b981" },
    Preset { name: "sunset", primary: "#f97316", secondary: "#8b5cf6" },
    Preset { name: "forest", primary: "#15803d", secondary: "#ca8a04" },
    Preset { name: "berry", primary: "#be185d", secondary: "#0d9488" },
    Preset { name: "slate", primary: "#475569", secondary: "#f59e0b" },
];

/// All presets, in listing order.
#[must_use]
pub const fn presets() -> &'static [Preset] {
    PRESETS
}

/// Look up a preset by name and turn it into a build request.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn preset(name: &str) -> Option<ThemeInput> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .map(|p| ThemeInput::new(p.primary, p.secondary).with_name(p.name))
}
