// SPDX-License-Identifier: MIT
//! The derived token tree and its flat CSS variable view.
//!
//! Variable names are a compatibility surface for consuming style sheets;
//! [`ThemeTokens::css_variables`] is the single place that spells them.

use serde::Serialize;
use tinto_color::normalize_hex;

use crate::error::ThemeError;
use crate::scale::{ExtendedScale, Gradient, NeutralScale};

/// Tokens whose values are not plain `#rrggbb` colors.
const NON_HEX_TOKENS: [&str; 3] = ["sidebar-item-color", "chip-shadow", "gradient-brand"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextTokens {
    pub strong: String,
    pub body: String,
    pub muted: String,
    pub inverse: String,
}

/// Page and panel backgrounds, lightest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceTokens {
    #[serde(rename = "0")]
    pub s0: String,
    #[serde(rename = "1")]
    pub s1: String,
    #[serde(rename = "2")]
    pub s2: String,
    #[serde(rename = "3")]
    pub s3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonTokens {
    pub bg: String,
    pub text: String,
    pub hover: String,
    pub active: String,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonSet {
    pub primary: ButtonTokens,
    pub secondary: ButtonTokens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeTokens {
    pub bg: String,
    pub text: String,
}

/// Status badges. Hues are fixed, never derived from the seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeSet {
    pub success: BadgeTokens,
    pub warning: BadgeTokens,
    pub danger: BadgeTokens,
    pub info: BadgeTokens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarTokens {
    pub bg: String,
    /// May be an `rgba(…)` value.
    pub item_color: String,
    pub item_active_bg: String,
    pub item_active_indicator: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipTokens {
    pub bg: String,
    pub text: String,
    /// CSS `box-shadow` value.
    pub shadow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradientTokens {
    pub brand: Gradient,
}

/// Every token a theme defines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTokens {
    pub primary: ExtendedScale,
    pub secondary: ExtendedScale,
    pub neutral: NeutralScale,
    pub text: TextTokens,
    pub surface: SurfaceTokens,
    pub button: ButtonSet,
    pub badge: BadgeSet,
    pub sidebar: SidebarTokens,
    pub chip: ChipTokens,
    pub gradient: GradientTokens,
}

impl ThemeTokens {
    /// Flat `(name, value)` list in emission order. Names carry no `--`.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        let mut vars = Vec::with_capacity(64);
        let mut push = |name: String, value: &str| vars.push((name, value.to_string()));

        for (prefix, scale) in [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("neutral", &self.neutral),
        ] {
            for (key, hex) in scale.iter() {
                push(format!("{prefix}-{key}"), hex);
            }
        }

        let t = &self.text;
        for (name, value) in [
            ("strong", &t.strong),
            ("body", &t.body),
            ("muted", &t.muted),
            ("inverse", &t.inverse),
        ] {
            push(format!("text-{name}"), value);
        }

        let s = &self.surface;
        for (i, value) in [&s.s0, &s.s1, &s.s2, &s.s3].into_iter().enumerate() {
            push(format!("surface-{i}"), value);
        }

        for (kind, b) in [("primary", &self.button.primary), ("secondary", &self.button.secondary)] {
            for (name, value) in [
                ("bg", &b.bg),
                ("text", &b.text),
                ("hover", &b.hover),
                ("active", &b.active),
                ("focus", &b.focus),
            ] {
                push(format!("btn-{kind}-{name}"), value);
            }
        }

        let badges = &self.badge;
        for (kind, b) in [
            ("success", &badges.success),
            ("warning", &badges.warning),
            ("danger", &badges.danger),
            ("info", &badges.info),
        ] {
            push(format!("badge-{kind}-bg"), &b.bg);
            push(format!("badge-{kind}-text"), &b.text);
        }

        let sb = &self.sidebar;
        push("sidebar-bg".into(), &sb.bg);
        push("sidebar-item-color".into(), &sb.item_color);
        push("sidebar-item-active-bg".into(), &sb.item_active_bg);
        push("sidebar-item-active-indicator".into(), &sb.item_active_indicator);

        push("chip-bg".into(), &self.chip.bg);
        push("chip-text".into(), &self.chip.text);
        push("chip-shadow".into(), &self.chip.shadow);

        push("gradient-brand".into(), &self.gradient.brand.css);
        vars
    }

    /// Value of one variable by name (without `--`).
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<String> {
        self.css_variables()
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check that every color token is a well-formed `#rrggbb` value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidToken`] naming the first bad token.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (name, value) in self.css_variables() {
            if NON_HEX_TOKENS.contains(&name.as_str()) {
                continue;
            }
            if normalize_hex(&value).is_err() {
                return Err(ThemeError::InvalidToken { name, value });
            }
        }
        Ok(())
    }
}
