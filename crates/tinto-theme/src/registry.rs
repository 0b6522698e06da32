// SPDX-License-Identifier: MIT
//! Per-tenant style sheets.
//!
//! A host serving several tenants keeps one [`StyleRegistry`] and applies
//! each tenant's built theme to it. Every tenant's variables live under
//! its own `[data-tenant="…"]` selector, so the rendered sheet can be
//! served once and scoped by an attribute on the tenant's root element.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::assemble::BuildThemeResult;
use crate::css::render_css;

/// Rendered CSS blocks keyed by tenant identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
    sheets: BTreeMap<String, String>,
}

impl StyleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector scoping a tenant's variables.
    ///
    /// `"` and `\` are backslash-escaped; control characters become CSS hex
    /// escapes (`\a ` for a newline) so the string stays on one line.
    #[must_use]
    pub fn selector_for(tenant: &str) -> String {
        let mut escaped = String::with_capacity(tenant.len());
        for ch in tenant.chars() {
            match ch {
                '"' | '\\' => {
                    escaped.push('\\');
                    escaped.push(ch);
                }
                c if c.is_control() => {
                    let _ = write!(escaped, "\\{:x} ", u32::from(c));
                }
                c => escaped.push(c),
            }
        }
        format!("[data-tenant=\"{escaped}\"]")
    }

    /// Render `theme` for `tenant`, replacing any earlier sheet.
    ///
    /// Returns the sheet that was replaced, if any.
    pub fn apply(&mut self, tenant: &str, theme: &BuildThemeResult) -> Option<String> {
        let css = render_css(&theme.tokens, &Self::selector_for(tenant));
        tracing::debug!(tenant, is_valid = theme.validation.is_valid, "applied tenant theme");
        self.sheets.insert(tenant.to_string(), css)
    }

    /// Drop a tenant's sheet. Returns it if one was present.
    pub fn remove(&mut self, tenant: &str) -> Option<String> {
        let removed = self.sheets.remove(tenant);
        if removed.is_some() {
            tracing::debug!(tenant, "removed tenant theme");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, tenant: &str) -> Option<&str> {
        self.sheets.get(tenant).map(String::as_str)
    }

    /// Tenant identifiers in sorted order.
    pub fn tenants(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All sheets concatenated in tenant order, blank line between blocks.
    #[must_use]
    pub fn render(&self) -> String {
        self.sheets
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
