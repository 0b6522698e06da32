// SPDX-License-Identifier: MIT
//! CSS custom-property rendering.

use std::fmt::Write as _;

use crate::tokens::ThemeTokens;

/// Selector used when none is configured.
pub const DEFAULT_SELECTOR: &str = ":root";

/// Render every token as a custom property inside one rule block.
///
/// Output is deterministic: same tokens and selector, same bytes.
#[must_use]
pub fn render_css(tokens: &ThemeTokens, selector: &str) -> String {
    let selector = match selector.trim() {
        "" => DEFAULT_SELECTOR,
        s => s,
    };
    let vars = tokens.css_variables();
    let mut out = String::with_capacity(vars.len() * 32);
    let _ = writeln!(out, "{selector} {{");
    for (name, value) in &vars {
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push_str("}\n");
    out
}
