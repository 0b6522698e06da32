// SPDX-License-Identifier: MIT
//! Theme build configuration.

use serde::{Deserialize, Serialize};

use crate::contrast::{TextSize, WcagLevel};
use crate::css::DEFAULT_SELECTOR;

/// Angle of the brand gradient when none is configured, in degrees.
pub const DEFAULT_GRADIENT_ANGLE: f32 = 135.0;

/// Knobs for [`build_theme_tokens_with`](crate::build_theme_tokens_with).
///
/// Every field has a default, so `{}` deserializes to [`ThemeOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOptions {
    /// Selector the CSS block is emitted under.
    pub selector: String,
    /// Brand gradient angle in degrees.
    pub gradient_angle: f32,
    /// Contrast level for button, badge and chip text.
    pub level: WcagLevel,
    pub text_size: TextSize,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            gradient_angle: DEFAULT_GRADIENT_ANGLE,
            level: WcagLevel::Aa,
            text_size: TextSize::Normal,
        }
    }
}

impl ThemeOptions {
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    #[must_use]
    pub const fn with_gradient_angle(mut self, angle: f32) -> Self {
        self.gradient_angle = angle;
        self
    }

    #[must_use]
    pub const fn with_level(mut self, level: WcagLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_text_size(mut self, size: TextSize) -> Self {
        self.text_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        let opts: ThemeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ThemeOptions::default());
    }

    #[test]
    fn partial_object_keeps_other_defaults() {
        let opts: ThemeOptions =
            serde_json::from_str(r#"{"level": "AAA", "gradientAngle": 90}"#).unwrap();
        assert_eq!(opts.level, WcagLevel::Aaa);
        assert!((opts.gradient_angle - 90.0).abs() < f32::EPSILON);
        assert_eq!(opts.selector, ":root");
        assert_eq!(opts.text_size, TextSize::Normal);
    }

    #[test]
    fn builders_chain() {
        let opts = ThemeOptions::default()
            .with_selector(".brand")
            .with_level(WcagLevel::Aaa)
            .with_text_size(TextSize::Large)
            .with_gradient_angle(45.0);
        assert_eq!(opts.selector, ".brand");
        assert_eq!(opts.text_size, TextSize::Large);
    }
}
